use std::path::PathBuf;

use clap::Parser;
use eyre::Result;

use dass_cli::cli::{Cli, Command, ConfigAction, InstrumentArgs, TakeArgs};
use dass_cli::config::{self, DassConfig};
use dass_cli::form;
use dass_cli::persist;
use dass_cli::present::ResultPresenter;
use dass_core::models::AssessmentRecord;
use dass_instruments::session::Session;
use dass_instruments::{Instrument, open_instrument};

const DEFAULT_INSTRUMENT: &str = "dass21";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr; stdout carries the results.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = config::resolve_path(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Take(TakeArgs::default())) {
        Command::Take(args) => {
            let config = config::load_or_default(&config_path)?;
            take(&config, args).await
        }
        Command::Questions(args) => {
            let config = config::load_or_default(&config_path)?;
            list_questions(&config, &args)
        }
        Command::Config { action } => match action {
            ConfigAction::Show => {
                let config = config::load_or_default(&config_path)?;
                println!("# {}", config_path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
            ConfigAction::Init => {
                if config_path.exists() {
                    println!("config already exists at {}", config_path.display());
                } else {
                    config::save_config(&config_path, &DassConfig::default())?;
                    println!("wrote default config to {}", config_path.display());
                }
                Ok(())
            }
        },
    }
}

fn load_instrument(config: &DassConfig, args: &InstrumentArgs) -> Result<Box<dyn Instrument>> {
    let custom = args
        .instrument_file
        .as_deref()
        .or(config.instrument_path.as_deref());
    Ok(open_instrument(DEFAULT_INSTRUMENT, custom)?)
}

async fn take(config: &DassConfig, args: TakeArgs) -> Result<()> {
    let instrument = load_instrument(config, &args.instrument)?;

    let mut session = Session::new(instrument.as_ref());
    if let Some(raw) = &args.answers {
        form::apply_answers(&mut session, &form::answers_from_args(raw))?;
    } else if let Some(path) = &args.answers_file {
        form::apply_answers(&mut session, &form::answers_from_file(path)?)?;
    } else {
        form::collect_interactive(&mut session)?;
    }

    let submission = session.submit()?;
    let completed_at = jiff::Timestamp::now();

    let presenter = ResultPresenter {
        output_dir: if args.no_export {
            None
        } else {
            Some(
                args.output_dir
                    .clone()
                    .or_else(|| config.output_dir.clone())
                    .unwrap_or_else(|| PathBuf::from(".")),
            )
        },
        chart: config.chart.clone(),
        report: args.report,
    };
    let presentation = presenter.present(instrument.as_ref(), &submission, completed_at);

    println!("\nYour Results\n");
    print!("{}", presentation.table);
    println!();
    for export in &presentation.exports {
        match &export.result {
            Ok(()) => println!("Saved {} to {}", export.kind, export.path.display()),
            Err(e) => eprintln!("Could not save {}: {e}", export.kind),
        }
    }

    if let Some(store) = persist::select_store(&config.store, args.store_dir, args.no_store) {
        let record = AssessmentRecord::new(
            submission.instrument_id.clone(),
            submission.totals.clone(),
            submission.responses.clone(),
        );
        if let Some(location) = persist::persist(store.as_ref(), &record).await {
            tracing::debug!(%location, "assessment stored");
        }
    }

    Ok(())
}

fn list_questions(config: &DassConfig, args: &InstrumentArgs) -> Result<()> {
    let instrument = load_instrument(config, args)?;
    let bank = instrument.bank();

    println!("{} ({} questions)\n", instrument.name(), bank.len());
    let options: Vec<String> = bank
        .options
        .iter()
        .map(|(label, score)| format!("{score} = {label}"))
        .collect();
    println!("Options: {}\n", options.join(", "));

    for (i, question) in bank.questions.iter().enumerate() {
        println!("{:>2}. [{}] {}", i + 1, question.subscale.code(), question.prompt);
    }
    Ok(())
}
