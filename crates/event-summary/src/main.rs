mod bootstrap;

use anyhow::Result;
use clap::Parser;
use summary_core::settings::Settings;
use summary_data::analysis::summarize_csv_file;
use summary_data::export::write_summary_csv;
use summary_ui::table_view::render_summary_table;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("event-summary v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Student column: {}, event column: {}",
        settings.student_column,
        settings.event_column
    );

    if settings.output.is_some() && settings.files.len() > 1 {
        anyhow::bail!("--output can only be used with a single input file");
    }

    let mut failures = 0usize;

    // Each file is one independent attempt: a failure is terminal for that
    // file only and the next one starts clean.
    for file in &settings.files {
        match summarize_csv_file(file, settings.student_column, settings.event_column) {
            Ok(summary) => {
                if settings.files.len() > 1 {
                    println!("{}", file.display());
                }
                print!("{}", render_summary_table(&summary.table));

                if summary.metadata.rows_skipped > 0 {
                    tracing::warn!(
                        "{}: skipped {} malformed rows",
                        file.display(),
                        summary.metadata.rows_skipped
                    );
                }

                if let Some(output) = &settings.output {
                    match write_summary_csv(output, &summary.table) {
                        Ok(()) => println!("Summary written to {}", output.display()),
                        Err(e) => {
                            tracing::error!("{}", e);
                            failures += 1;
                        }
                    }
                }
            }
            Err(e) => {
                tracing::error!("{}: {}", file.display(), e);
                eprintln!("Error processing {}: {}", file.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} file(s) failed", settings.files.len());
    }
    Ok(())
}
