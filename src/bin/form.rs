use anyhow::Result;
use drowse::{config, form_app, logging, term};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = config::load_config()?;
    logging::init_diagnostics(&cfg.logging)?;

    term::install_panic_hook();
    let mut terminal = term::setup_terminal()?;

    let result = form_app::run(&mut terminal, cfg).await;

    term::restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
