use anyhow::Context;
use clap::Parser;
use purchase_ledger::{cli, config, error, export, file_storage, prompt, table};
use cli::{Cli, Commands};
use config::Config;
use error::LedgerError;
use file_storage::FileStorage;
use purchase_ledger_common::{CommitOutcome, Ledger};
use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config.resolve_data_dir()?,
    };
    let mut ledger = Ledger::open(FileStorage::new(&data_dir));

    match cli.command {
        Commands::Add { fields, no_prompt } => {
            fields.apply(&mut ledger);
            if !no_prompt {
                prompt::fill_missing_required(&mut ledger)?;
            }

            let missing = ledger.draft().missing_required();
            if !missing.is_empty() {
                ledger.cancel();
                return Err(LedgerError::MissingRequired(cli::describe_missing(&missing)).into());
            }

            ledger.commit()?;
            println!("✔ 登録しました (No.{})", ledger.records().len());
        }

        Commands::Edit { number, fields } => {
            let index = cli::record_index(number, ledger.records().len())?;
            ledger.begin_edit(index)?;
            fields.apply(&mut ledger);

            let missing = ledger.draft().missing_required();
            if !missing.is_empty() {
                ledger.cancel();
                return Err(LedgerError::MissingRequired(cli::describe_missing(&missing)).into());
            }

            if let CommitOutcome::Replaced(index) = ledger.commit()? {
                println!("✔ 修正しました (No.{})", index + 1);
            }
        }

        Commands::Delete { number, yes } => {
            let index = cli::record_index(number, ledger.records().len())?;
            ledger.begin_edit(index)?;

            let confirmed = yes || prompt::confirm_delete(&ledger.records()[index])?;
            if !confirmed {
                ledger.cancel();
                println!("取消しました");
                return Ok(());
            }

            if let Some(removed) = ledger.delete()? {
                println!("✔ 削除しました: {} {}", removed.product_code, removed.product_name);
            }
        }

        Commands::List { filter } => {
            ledger.set_criteria(filter.to_criteria());
            println!("{}", table::render_view(&ledger.view()));
        }

        Commands::Import { input } => {
            // 読み込みが終わってから置き換える
            let document = export::read_document(&input)
                .await
                .with_context(|| format!("read {}", input.display()))?;
            let count = ledger.import_document(&document)?;
            println!("✔ {}件を読み込みました: {}", count, input.display());
        }

        Commands::Export { output, compact } => {
            let path = export::output_path(output.as_deref(), &config.export_file_name);
            let document = ledger.export_document(config.pretty_export && !compact)?;
            export::write_document(&path, &document)
                .await
                .with_context(|| format!("write {}", path.display()))?;
            println!("✔ {}件を保存しました: {}", ledger.records().len(), path.display());
        }

        Commands::Report { output, title, filter } => {
            ledger.set_criteria(filter.to_criteria());
            let view = ledger.view();
            export::excel::generate_report(&view, &output, &title)?;
            println!("✔ Excel出力: {} ({}件)", output.display(), view.totals.count);
        }

        Commands::Config { set_data_dir, show } => {
            let mut config = config;

            if let Some(dir) = set_data_dir {
                config.set_data_dir(dir)?;
                println!("✔ データディレクトリを設定しました");
            }

            if show {
                println!("設定:");
                println!("  データディレクトリ: {}", config.resolve_data_dir()?.display());
                println!("  出力ファイル名: {}", config.export_file_name);
                println!("  JSON整形: {}", if config.pretty_export { "あり" } else { "なし" });
            }
        }
    }

    Ok(())
}
