use tc08_logger::{SamplingConfiguration, Usbtc08Library};

fn main() -> tc08_logger::Result<()> {
    env_logger::init();

    let config = SamplingConfiguration::single_mode();
    let library = Usbtc08Library::load()?;
    if let Some(header) = config.timestamp.header() {
        println!("{}", header);
    }
    tc08_logger::run(library, &config, None, |reading| {
        println!("{}", reading.console_line(config.timestamp));
    })
}
