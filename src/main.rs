use anyhow::Result;
use hostenv::cli::App;

fn main() -> Result<()> {
    let (app, args) = App::from_args()?;

    app.run(args)?;

    Ok(())
}
