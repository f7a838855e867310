use bubble_sorter::config::Config;
use bubble_sorter::driver;
use std::env;
use std::io;

fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let code = driver::run(&args, &config, &mut io::stdout().lock(), &mut io::stderr().lock());
    std::process::exit(code);
}
