use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use github_draw::areas::repository::Repository;
use github_draw::artifacts::canvas::pixel_grid::PixelGrid;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "github-draw",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Draw a bitmap onto a GitHub commit-activity calendar",
    long_about = "This tool replays a 52x7 monochrome bitmap as a series of backdated, \
    empty commits in a target repository, so that the commit-activity calendar \
    rendered by code-hosting platforms reproduces the bitmap.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The bitmap file to draw (52x7, white pixels stay empty)")]
    bitmap: PathBuf,
    #[arg(index = 2, help = "The path to the target Git repository")]
    repo: String,
}

fn main() -> Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            std::process::exit(0);
        }
        // Missing or malformed arguments print the usage text to stdout
        // and exit with status 1.
        _ => {
            print!("{}", err.render());
            std::process::exit(1);
        }
    });

    let grid = PixelGrid::load(&cli.bitmap)?;

    let mut repository = Repository::new(&cli.repo, Box::new(std::io::stdout()))?;
    repository.draw(&grid)?;

    Ok(())
}
