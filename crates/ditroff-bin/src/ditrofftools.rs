use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cache;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    if let Err(err) = Cli::parse().run() {
        if !err.is_empty() {
            eprintln!("Error: {err}");
        }
        std::process::exit(1);
    }
}

/// Tools for working with troff device output.
///
/// Device output is the format written by `troff` and read by device drivers.
/// It can be generated from a man page with `groff -Tutf8 -Z -man`.
#[derive(Debug, clap::Parser)]
#[command(
    name = "ditrofftools",
    author = "The Texcraft Project",
    version = "0.1",
    about,
    long_about,
    max_term_width(100)
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn run(self) -> Result<(), String> {
        match self.command {
            Command::Render(render) => render.run(),
            Command::Inspect(inspect) => inspect.run(),
            Command::Glyphs(glyphs) => glyphs.run(),
        }
    }
}

#[derive(Clone, Debug, clap::Subcommand)]
enum Command {
    /// Render a device output file to plain text.
    ///
    /// By default the text is printed to standard output.
    /// If any of the cache location flags is provided, the text is instead written
    ///     to the cache at
    ///
    ///     <cache-dir>/<release>/<package>/<package-version>/<locale>/<section>/<name>.txt
    ///
    /// In this case all of the location flags are required.
    Render(Render),

    /// Print the tokens in a device output file, one per line.
    Inspect(Inspect),

    /// Generate the special character table from groff's glyph registry.
    ///
    /// The registry is the file src/libs/libgroff/uniglyph.cpp in the groff source code.
    /// The output is Rust source code for the table module of the ditroff crate.
    Glyphs(Glyphs),
}

#[derive(Clone, Debug, Parser)]
struct Render {
    /// Path to the device output file, or - to read standard input.
    path: PathBuf,

    /// Root directory of the cache.
    #[arg(long, env = "DITROFF_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// Distribution release the page belongs to.
    #[arg(long)]
    release: Option<String>,

    /// Package the page belongs to.
    #[arg(long)]
    package: Option<String>,

    /// Version of the package.
    #[arg(long)]
    package_version: Option<String>,

    /// Locale of the page, e.g. en.
    #[arg(long)]
    locale: Option<String>,

    /// Manual section of the page, e.g. 1.
    #[arg(long)]
    section: Option<String>,

    /// Name of the page in the cache. Defaults to the stem of the input file.
    #[arg(long)]
    name: Option<String>,
}

impl Render {
    fn run(self) -> Result<(), String> {
        let location = self.location()?;
        let input = Input::read(&self.path)?;
        let text = match ditroff::render_to_string(&input.source) {
            Ok(text) => text,
            Err(err) => return Err(input.report(&err)),
        };
        let Some((cache_dir, location)) = location else {
            print!("{text}");
            return Ok(());
        };
        let name = match (&self.name, self.path.file_stem()) {
            (Some(name), _) => name.clone(),
            (None, Some(stem)) if !input.is_stdin() => stem.to_string_lossy().into_owned(),
            (None, _) => {
                return Err("the --name flag is required when reading from standard input".into())
            }
        };
        location.write(&cache_dir, &name, &text)?;
        Ok(())
    }

    fn location(&self) -> Result<Option<(PathBuf, cache::Location)>, String> {
        let flags = [
            ("release", &self.release),
            ("package", &self.package),
            ("package-version", &self.package_version),
            ("locale", &self.locale),
            ("section", &self.section),
        ];
        if flags.iter().all(|(_, value)| value.is_none()) {
            return Ok(None);
        }
        if let Some((flag, _)) = flags.iter().find(|(_, value)| value.is_none()) {
            return Err(format!(
                "the --{flag} flag is required when writing to the cache"
            ));
        }
        let Some(cache_dir) = self.cache_dir.clone() else {
            return Err(
                "a cache directory must be provided using --cache-dir or DITROFF_CACHE_DIR".into(),
            );
        };
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        Ok(Some((
            cache_dir,
            cache::Location {
                release: value(&self.release),
                package: value(&self.package),
                version: value(&self.package_version),
                locale: value(&self.locale),
                section: value(&self.section),
            },
        )))
    }
}

#[derive(Clone, Debug, Parser)]
struct Inspect {
    /// Path to the device output file, or - to read standard input.
    path: PathBuf,

    /// Print each token as a JSON object.
    #[arg(long)]
    json: bool,
}

impl Inspect {
    fn run(self) -> Result<(), String> {
        let input = Input::read(&self.path)?;
        for result in ditroff::Lexer::new(&input.source) {
            let token = match result {
                Ok(token) => token,
                Err(err) => return Err(input.report(&err)),
            };
            if self.json {
                let line = serde_json::to_string(&token)
                    .map_err(|err| format!("failed to serialize token: {err}"))?;
                println!("{line}");
            } else {
                println!("{:?}", token);
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Parser)]
struct Glyphs {
    /// Path to uniglyph.cpp, or - to read standard input.
    path: PathBuf,

    /// Version of the registry, e.g. the groff release or commit it comes from.
    #[arg(long)]
    registry_version: String,
}

impl Glyphs {
    fn run(self) -> Result<(), String> {
        let input = Input::read(&self.path)?;
        let source = ditroff::glyphs::generate(&input.source, &self.registry_version)
            .map_err(|err| format!("failed to parse `{}`: {}", input.name, err))?;
        print!("{source}");
        Ok(())
    }
}

/// A text file read from disk or from standard input.
struct Input {
    name: String,
    source: String,
}

impl Input {
    const STDIN: &'static str = "<stdin>";

    fn read(path: &Path) -> Result<Input, String> {
        if path == Path::new("-") {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|err| format!("failed to read standard input: {err}"))?;
            return Ok(Input {
                name: Input::STDIN.into(),
                source,
            });
        }
        let b = match std::fs::read(path) {
            Ok(b) => b,
            Err(err) => return Err(format!("failed to read `{}`: {}", path.display(), err)),
        };
        let source = String::from_utf8(b)
            .map_err(|err| format!("`{}` is not valid UTF-8: {}", path.display(), err))?;
        Ok(Input {
            name: path.display().to_string(),
            source,
        })
    }

    fn is_stdin(&self) -> bool {
        self.name == Input::STDIN
    }

    /// Print a report for the error to stderr.
    ///
    /// Returns the message to use if the report can't be printed.
    fn report(&self, err: &ditroff::Error) -> String {
        let cache = (self.name.as_str(), ariadne::Source::from(self.source.as_str()));
        match err.ariadne_report(&self.name).eprint(cache) {
            Ok(()) => String::new(),
            Err(_) => format!("{err}"),
        }
    }
}
