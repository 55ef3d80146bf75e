
// extern crate definitions
#[macro_use]
extern crate error_chain;
extern crate reqwest;
extern crate strum;
#[macro_use]
extern crate strum_macros;
extern crate tokio;

// internal mods
mod builder;
mod ddragon;
mod server;
mod util;

use std::env;
use tracing_subscriber::EnvFilter;

fn usage(){
    println!("Usage: lol-random-build (configured through PORT, BUILD_MODE, DDRAGON_CDN, DDRAGON_VERSION, DDRAGON_LOCALE, REQUEST_TIMEOUT_SECS)")
}

error_chain!{
    foreign_links {
        Io(::std::io::Error);
    }
}

async fn do_main() -> Result<()> {

    // ensure proper number of args
    let args : Vec<String> = env::args().collect();
    if args.len() != 1 {
        usage();
        return Err(Error::from(format!("Invalid number of command line arguments. Expected 0, got {}", args.len() - 1)));
    }

    let config = util::Config::from_env().chain_err(|| "Unable to load configuration.")?;

    let state = server::AppState {
        context : ddragon::Context::new(&config.cdn_root, &config.version, &config.locale),
        mode : config.mode,
        request_timeout : config.request_timeout,
    };
    tracing::info!(cdn = state.context.base_uri(), locale = %config.locale, "Serving random builds");

    server::serve(state, config.port).await.chain_err(|| format!("Server on port {} failed.", config.port))?;

    Ok(())
}

/// Workaround to integrate error-chain with async main function
/// in tokio. Pretty much just an expansion of the `quick_main!`
/// macro provided by error-chain
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(ref e) = do_main().await {
        use error_chain::ChainedError;
        use std::io::Write; // for writeln! on stderr
        let stderr = &mut ::std::io::stderr();
        let errmsg = "Error writing to stderr";

        writeln!(stderr, "{}", e.display_chain()).expect(errmsg);
        ::std::process::exit(1);
    }
}
