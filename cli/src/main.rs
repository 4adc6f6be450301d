use clap::Parser;
use dagmenu_cli::app;
use dagmenu_cli::args::{Args, Commands};
use dagmenu_cli::error::CliError;
use dagmenu_cli::logging::init_tracing;
use dagmenu_core::api::ServicesFactory;
use dagmenu_plugins::services::SchedulerServicesFactory;

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = Args::parse();
    let cfg = app::resolve_config(&args)?;
    init_tracing(&cfg.logging)?;

    let mut stdout = std::io::stdout().lock();
    match &args.command {
        Commands::Actions(menu) => {
            app::list_actions(&cfg, menu, &mut stdout)?;
            Ok(0)
        }
        Commands::Run(run) => {
            let services = SchedulerServicesFactory.build_services(&cfg).await?;
            let report = app::run_action(&cfg, services, run, &mut stdout).await?;
            tracing::debug!(events = report.events.len(), "run finished");
            Ok(report.exit_code())
        }
    }
}
