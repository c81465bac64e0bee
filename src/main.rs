// std imports
use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write, stdin, stdout},
    path::Path,
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use strmatch::{
    Status,
    app::{self, App},
    cli,
    error::*,
    regex::{self, Regex},
    settings::{Mode, Settings},
};

const STRMATCH_DEBUG_LOG: &str = "STRMATCH_DEBUG_LOG";
const STRMATCH_DEBUG_LOG_STYLE: &str = "STRMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(STRMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(STRMATCH_DEBUG_LOG)
                .write_style(STRMATCH_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<Status> {
    bootstrap();

    let opt = cli::Opt::parse();
    let settings = Settings::load(&opt.config)?;

    let mode = opt.mode(settings.mode);
    let options = regex::Options {
        dot_matches_newline: opt.dot_matches_newline || settings.regex.dot_matches_newline,
    };
    log::debug!("mode: {:?}, options: {:?}", mode, options);

    if opt.dump {
        let mut out = stdout().lock();
        match mode {
            Mode::Regex => write!(out, "{}", Regex::with_options(&opt.pattern, options)?)?,
            Mode::Wildcard => writeln!(out, "{}", wildcard::Pattern::new(&opt.pattern)?)?,
        }
        return Ok(Status::Ok);
    }

    let app = App::new(
        app::Matcher::new(mode, &opt.pattern, options)?,
        app::Options {
            invert: opt.invert,
            only_matching: opt.only_matching,
            count: opt.count,
        },
    );

    let inputs = if opt.files.is_empty() {
        vec![open(Path::new("-"))?]
    } else {
        opt.files.iter().map(|path| open(path)).collect::<Result<Vec<_>>>()?
    };

    let mut out = BufWriter::new(stdout().lock());
    let selected = app.run(inputs, &mut out)?;
    out.flush()?;

    Ok((selected != 0).into())
}

fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(stdin().lock()));
    }

    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

fn main() {
    let status = match run() {
        Ok(status) => status,
        Err(Error::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => Status::Ok,
        Err(err) => {
            eprintln!("strmatch: {}", err);
            Status::SyntaxError
        }
    };
    process::exit(status.code().into());
}
