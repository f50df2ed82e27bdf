use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use concierge_md::{Config, Error, SvgDocument, Transcript};

#[derive(Parser)]
#[command(name = "concierge-md")]
#[command(about = "Render concierge chat replies written in a small markdown subset")]
struct Cli {
    /// TOML config file (defaults apply when missing)
    #[arg(short, long, global = true, default_value = "concierge.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one reply text file
    Render {
        /// Input text file
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Output file (stdout for text formats when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Treat unpaired runs like "**" as empty emphasis
        #[arg(long)]
        loose: bool,
    },
    /// Render a JSON transcript of `{ "role", "text" }` messages
    Transcript {
        /// Input JSON file
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Typst)]
        format: Format,

        /// Output file (stdout for text formats when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
    Typst,
    Pdf,
    Svg,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Html => "html",
            Format::Json => "json",
            Format::Typst => "typ",
            Format::Pdf => "pdf",
            Format::Svg => "svg",
        }
    }
}

enum Rendered {
    Text(String),
    Pdf(Vec<u8>),
    Svg(SvgDocument),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut config = Config::load(&cli.config);

    match cli.command {
        Command::Render {
            input,
            format,
            output,
            loose,
        } => {
            if loose {
                config.inline.loose_delimiters = true;
            }
            let text = read(&input)?;
            let rendered = match format {
                Format::Text => Rendered::Text(concierge_md::text_to_plain(&text, &config)),
                Format::Html => Rendered::Text(concierge_md::text_to_html(&text, &config)),
                Format::Json => Rendered::Text(concierge_md::text_to_json(&text, &config)?),
                Format::Typst => Rendered::Text(concierge_md::text_to_typst(&text, &config)),
                Format::Pdf => Rendered::Pdf(concierge_md::text_to_pdf(&text, &config)?),
                Format::Svg => Rendered::Svg(concierge_md::text_to_svg(&text, &config)?),
            };
            emit(rendered, &input, format, output)
        }
        Command::Transcript {
            input,
            format,
            output,
        } => {
            let transcript = Transcript::from_json(&read(&input)?)?;
            if transcript.is_empty() {
                warn!("{} holds no messages", input.display());
            }
            info!(messages = transcript.len(), "loaded transcript");
            let rendered = match format {
                Format::Text => Rendered::Text(
                    transcript
                        .messages()
                        .iter()
                        .map(|m| concierge_md::text_to_plain(&m.text, &config))
                        .collect::<Vec<_>>()
                        .join("\n\n"),
                ),
                Format::Html => {
                    Rendered::Text(concierge_md::transcript_to_html(&transcript, &config))
                }
                Format::Json => Rendered::Text(transcript.to_json()?),
                Format::Typst => {
                    Rendered::Text(concierge_md::transcript_to_typst(&transcript, &config))
                }
                Format::Pdf => {
                    Rendered::Pdf(concierge_md::transcript_to_pdf(&transcript, &config)?)
                }
                Format::Svg => {
                    Rendered::Svg(concierge_md::transcript_to_svg(&transcript, &config)?)
                }
            };
            emit(rendered, &input, format, output)
        }
    }
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn write(path: &Path, contents: &[u8]) -> Result<(), Error> {
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    println!("Created {}", path.display());
    Ok(())
}

fn print(text: &str) -> Result<(), Error> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .map_err(|e| Error::io("<stdout>", e))?;
    if !text.ends_with('\n') {
        stdout
            .write_all(b"\n")
            .map_err(|e| Error::io("<stdout>", e))?;
    }
    Ok(())
}

fn emit(
    rendered: Rendered,
    input: &Path,
    format: Format,
    output: Option<PathBuf>,
) -> Result<(), Error> {
    match rendered {
        Rendered::Text(text) => match output {
            Some(path) => write(&path, text.as_bytes()),
            None => print(&text),
        },
        Rendered::Pdf(bytes) => {
            let path = output.unwrap_or_else(|| input.with_extension(format.extension()));
            write(&path, &bytes)
        }
        Rendered::Svg(doc) => {
            let path = output.unwrap_or_else(|| input.with_extension(format.extension()));
            info!(
                pages = doc.pages.len(),
                width_pt = doc.width_pt,
                height_pt = doc.height_pt,
                "writing SVG"
            );
            if doc.pages.len() == 1 {
                return write(&path, doc.pages[0].as_bytes());
            }
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "page".to_string());
            for (i, page) in doc.pages.iter().enumerate() {
                let page_path = path.with_file_name(format!("{}-{}.svg", stem, i + 1));
                write(&page_path, page.as_bytes())?;
            }
            Ok(())
        }
    }
}
