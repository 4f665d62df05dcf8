use chrono::Local;

use tc08_logger::{SamplingConfiguration, TimestampStyle, Usbtc08Library};

fn main() -> tc08_logger::Result<()> {
    env_logger::init();

    let start = Local::now();
    let library = Usbtc08Library::load()?;
    tc08_logger::collect_temperature_data_with(
        library, start, SamplingConfiguration::DEFAULT_NUM_SAMPLES, |reading| {
            println!("{}", reading.console_line(TimestampStyle::Elapsed));
        })?;
    Ok(())
}
