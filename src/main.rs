use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jwks_gen::Error;

/// Convert an RSA public key (PEM) into a JWKS document for RS256 verification.
#[derive(Debug, Parser)]
#[command(name = "jwks_gen", version)]
struct Args {
    /// PEM-encoded RSA public key (SubjectPublicKeyInfo or PKCS#1)
    public_key: PathBuf,
    /// Key identifier copied verbatim into the `kid` field
    #[arg(allow_hyphen_values = true)]
    kid: String,
}

fn run() -> Result<(), Error> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            e.print().map_err(Error::Output)?;
            return Ok(());
        }
        Err(e) => return Err(Error::Usage(e.render().to_string().trim_end().to_owned())),
    };

    jwks_gen::logging::Config::from_env().install();

    let json = jwks_gen::generate(&args.public_key, &args.kid)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").map_err(Error::Output)?;
    stdout.flush().map_err(Error::Output)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
