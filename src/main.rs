use anyhow::Context;
use clap::{Parser, Subcommand};
use resume_forge::{
    Ai, AiClient, Config, Extraction, Renderer, Resume, load_resume, save_html, save_resume,
    wizard,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "resume-forge",
    version,
    about = "Build, AI-polish and render résumés from the command line",
    long_about = "Build, AI-polish and render résumés from the command line.\n\n\
    A résumé lives in a JSON file. Extract one from PDF text with AI, embed a \
    photo, generate a summary, review fields interactively, then render it \
    into one of four HTML themes.\n\n\
    USAGE EXAMPLES:\n  \
      # Extract structured data from PDF text\n  \
      resume-forge extract cv.txt -o resume.json\n\n  \
      # Embed a photo\n  \
      resume-forge set-photo resume.json photo.jpg\n\n  \
      # Review fields with AI assistance\n  \
      resume-forge review resume.json\n\n  \
      # Render to HTML\n  \
      resume-forge render resume.json resume.html"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a résumé JSON file to themed HTML
    Render {
        /// Résumé JSON file
        input: PathBuf,
        /// Output HTML file
        output: PathBuf,
    },

    /// Extract structured résumé JSON from plain text (AI)
    Extract {
        /// Text file (PDF text extracted externally)
        input: PathBuf,
        /// Output résumé JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Embed a photo into a résumé JSON file (base64)
    SetPhoto {
        /// Résumé JSON file
        resume: PathBuf,
        /// Image file (jpg/png)
        photo: PathBuf,
    },

    /// Generate a professional summary with AI
    Summary {
        /// Résumé JSON file
        resume: PathBuf,
        /// Save the generated summary back to the résumé file
        #[arg(long)]
        save: bool,
    },

    /// Interactive AI review wizard
    Review {
        /// Résumé JSON file
        resume: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let config = Config::from_env();

    match cli.command {
        Command::Render { input, output } => cmd_render(&input, &output),
        Command::Extract { input, output } => cmd_extract(&config, &input, output.as_deref()),
        Command::SetPhoto { resume, photo } => cmd_set_photo(&resume, &photo),
        Command::Summary { resume, save } => cmd_summary(&config, &resume, save),
        Command::Review { resume } => cmd_review(&config, &resume),
    }
}

fn setup_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("resume_forge=info"),
        1 => EnvFilter::new("resume_forge=debug"),
        _ => EnvFilter::new("resume_forge=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .init();
}

fn cmd_render(input: &Path, output: &Path) -> anyhow::Result<()> {
    let resume = load_resume(input).context("Failed to load resume")?;
    resume.validate().context("Resume failed validation")?;

    let html = Renderer::new()?
        .render(&resume)
        .context("Failed to render resume")?;

    save_html(&html, output).context("Failed to write HTML")?;
    println!("Rendered HTML written to {}", output.display());
    Ok(())
}

fn cmd_extract(config: &Config, input: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let pdf_text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let ai = AiClient::new(config)?;
    println!("Calling AI to extract structured resume...");

    match ai.extract_resume(&pdf_text)? {
        Extraction::Fields(fields) => {
            let mut resume = Resume::new();
            resume.merge(&fields);

            let path = output.unwrap_or_else(|| Path::new("resume_extracted.json"));
            save_resume(&resume, path).context("Failed to save extracted resume")?;
            println!("Extracted resume saved to {}", path.display());
        }
        Extraction::Unparsed { error, raw } => {
            // Keep the raw output visible instead of discarding it.
            eprintln!("AI extraction produced non-JSON output ({error}):");
            println!("{raw}");
        }
    }
    Ok(())
}

fn cmd_set_photo(resume_path: &Path, photo: &Path) -> anyhow::Result<()> {
    let mut resume = load_resume(resume_path).context("Failed to load resume")?;

    let bytes =
        fs::read(photo).with_context(|| format!("Failed to read {}", photo.display()))?;
    resume.set_photo(&bytes);

    save_resume(&resume, resume_path).context("Failed to save resume")?;
    println!("Photo embedded into resume JSON.");
    Ok(())
}

fn cmd_summary(config: &Config, resume_path: &Path, save: bool) -> anyhow::Result<()> {
    let mut resume = load_resume(resume_path).context("Failed to load resume")?;

    let ai = AiClient::new(config)?;
    println!("Calling AI to generate a summary...");
    let summary = ai.generate_summary(&resume)?;

    println!("--- AI SUMMARY ---");
    println!("{summary}");

    if save {
        resume.summary = summary;
        save_resume(&resume, resume_path).context("Failed to save resume")?;
        println!("Saved AI summary into resume file.");
    }
    Ok(())
}

fn cmd_review(config: &Config, resume_path: &Path) -> anyhow::Result<()> {
    let mut resume = load_resume(resume_path).context("Failed to load resume")?;

    let ai = AiClient::new(config)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    wizard::run_review(&mut resume, &ai, &mut stdin.lock(), &mut stdout)?;

    save_resume(&resume, resume_path).context("Failed to save resume")?;
    println!("Saved to {}", resume_path.display());
    Ok(())
}
