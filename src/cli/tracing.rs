use tracing::{Level, Subscriber};
use tracing_subscriber::{fmt::MakeWriter, prelude::*};

pub(crate) fn init(verbose: bool) {
    subscriber(verbose, std::io::stderr).init();
}

fn subscriber<W>(verbose: bool, make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let tracing_layer = tracing_subscriber::fmt::layer().with_writer(make_writer);
    let filter = tracing_subscriber::filter::Targets::new()
        .with_target("octocrab", Level::DEBUG)
        .with_target(
            env!("CARGO_CRATE_NAME"),
            if verbose { Level::DEBUG } else { Level::INFO },
        )
        .with_default(Level::INFO);

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
}
