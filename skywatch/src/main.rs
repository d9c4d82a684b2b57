use std::io;

use clap::{crate_authors, crate_description, crate_version, CommandFactory, Parser};
use clap_complete::generate;
use eyre::Result;
use tracing::{info, trace};

use skywatch::{list_aircraft, watch, Config, Context, Opts, SubCommand};
use skywatch_common::init_logging;
use skywatch_sources::{Feed, OwnerRegistry};

/// Binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    // Standalone commands first, they need neither config nor feed.
    //
    match &opts.subcmd {
        // NOTE: you can generate UNIX shells completion on Windows and vice-versa.
        //
        Some(SubCommand::Completion(copts)) => {
            let generator = copts.shell;
            generate(generator, &mut Opts::command(), NAME, &mut io::stdout());
            return Ok(());
        }
        Some(SubCommand::Version) => {
            banner();
            eprintln!("Modules: ");
            eprintln!("\t{}", skywatch_common::version());
            eprintln!("\t{}", skywatch_formats::version());
            eprintln!("\t{}", skywatch_sources::version());
            return Ok(());
        }
        _ => (),
    }

    let cfg = Config::load(opts.config.as_deref())?;
    let ctx = Context::new(cfg, &opts)?;

    // The display owns the terminal, logs only go to the file there.
    //
    let tui = matches!(opts.subcmd, None | Some(SubCommand::Watch));
    init_logging(NAME, !tui && opts.verbose > 0, Some(ctx.log_file.clone()))?;
    info!("Starting {}/{}", NAME, VERSION);

    let registry = OwnerRegistry::load_or_empty(&ctx.owners, &ctx.owner_columns);
    let feed = Feed::new(&ctx.url, ctx.timeout)?;

    match &opts.subcmd {
        Some(SubCommand::List(lopts)) => {
            trace!("list");

            let out = list_aircraft(
                &feed,
                &registry,
                &ctx.reference,
                ctx.proximity,
                lopts.json,
            )?;
            println!("{out}");
        }
        _ => {
            trace!("watch");

            watch(&ctx, &feed, &registry)?;
        }
    }
    Ok(())
}

/// Display banner
///
fn banner() {
    eprintln!(
        r##"
{}/{} by {}
{}
"##,
        NAME,
        VERSION,
        AUTHORS,
        crate_description!()
    )
}
