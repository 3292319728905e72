use crate::config::LoggingConfig;
use crate::utils::constants::LOG_PATTERN;
use anyhow::Result;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;

const CONSOLE: &str = "console";
const LOGFILE: &str = "logfile";

pub fn build_config(logging: &LoggingConfig, level: LevelFilter) -> Result<Config> {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut builder =
        Config::builder().appender(Appender::builder().build(CONSOLE, Box::new(console)));
    let mut root = Root::builder().appender(CONSOLE);

    if let Some(path) = &logging.file {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)?;
        builder = builder.appender(Appender::builder().build(LOGFILE, Box::new(logfile)));
        root = root.appender(LOGFILE);
    }

    Ok(builder.build(root.build(level))?)
}

pub fn init(logging: &LoggingConfig, level: LevelFilter) -> Result<Handle> {
    let config = build_config(logging, level)?;
    Ok(log4rs::init_config(config)?)
}
