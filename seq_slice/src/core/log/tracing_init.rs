// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayPreference, TracingConfig, WriterConfig};
use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Build the layers for `tracing_config`, or [`None`] when it writes nowhere.
///
/// # Errors
///
/// Returns an error if a layer can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();

    let Some(display_layer) =
        try_create_display_layer(level_filter, tracing_config.get_writer_config())?
    else {
        return Ok(None);
    };

    // The level filter is also a layer of its own, so that layers added later by the
    // caller are filtered too.
    let mut layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];
    layers.push(Box::new(level_filter));
    layers.push(display_layer);

    Ok(Some(layers))
}

/// # Errors
///
/// Returns an error if the layer can't be created.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    Ok(match writer_config {
        WriterConfig::Display(DisplayPreference::Stdout) => Some(Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        )),
        WriterConfig::Display(DisplayPreference::Stderr) => Some(Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )),
        WriterConfig::None => None,
    })
}

/// Install a global subscriber built from `options`. Does nothing when the config writes
/// nowhere.
///
/// ```no_run
/// use seq_slice::{DisplayPreference, try_initialize_logging_global};
///
/// try_initialize_logging_global(DisplayPreference::Stderr).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let tracing_config: TracingConfig = options.into();

    let Some(layers) = try_create_layers(&tracing_config)? else {
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}
