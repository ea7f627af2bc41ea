// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `vantage`: renders a JSON graph script to a PNG without a window.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use vantage_script::{JsonScriptHost, Publication, ScriptRunner};
use vantage_settings::Settings;
use vantage_shell::{InputEvent, ScriptWatcher, Session};

#[derive(Parser, Debug)]
#[command(name = "vantage", version, about = "Render graph scripts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a script and write one frame, fitted to its content, as PNG.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Script to run; relative paths that do not exist are looked up in the
    /// configured script folder.
    script: PathBuf,
    /// Output image; defaults to the script path with a `.png` extension.
    #[arg(long, short)]
    out: Option<PathBuf>,
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u16,
    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u16,
    /// Settings file.
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn resolve_script(script: &Path, settings: &Settings) -> PathBuf {
    if script.is_relative() && !script.exists() {
        let candidate = settings.script_folder.join(script);
        if candidate.exists() {
            return candidate;
        }
    }
    script.to_path_buf()
}

fn render(args: RenderArgs) -> Result<(), Box<dyn Error>> {
    let settings_path = args.settings.unwrap_or_else(Settings::default_path);
    let settings = Settings::load(&settings_path);
    let script = resolve_script(&args.script, &settings);
    let out = args.out.unwrap_or_else(|| script.with_extension("png"));

    let publication = Publication::new();
    let mut watcher = ScriptWatcher::new(&script, ScriptRunner::new(publication.clone()));
    let mut session = Session::new(args.width, args.height, publication);

    if let Err(err) = watcher.poll(&mut JsonScriptHost) {
        session.report_script_error(&err);
        return Err(err.into());
    }
    // A refused fit is already logged; the frame keeps the default view.
    session.tick([InputEvent::ResetCamera]);

    let Some(frame) = session.frame() else {
        return Err("no frame was rendered".into());
    };
    let file = File::create(&out)?;
    frame.write_png(BufWriter::new(file))?;
    tracing::info!(
        script = %script.display(),
        out = %out.display(),
        points = session.items().points().len(),
        segments = session.items().segments().len(),
        "frame written"
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => render(args),
    }
}
