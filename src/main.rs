use anyhow::Result;
use camera_icons::{GenerateError, Generator, ICON_SIZES};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ Error: {err:#}");
            if let Some(remedy) = err
                .downcast_ref::<GenerateError>()
                .and_then(GenerateError::remedy)
            {
                eprintln!("{remedy}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    Generator::new(&ICON_SIZES).generate_all()?;
    Ok(())
}
