use switchboard::{derive::*, OneOf, Within};

#[derive(Default, SwitchboardParser)]
#[switchboard(program = "converters")]
struct Options {
    #[switchboard(mandatory, help = "Input file")]
    file: String,
    #[switchboard(mandatory, converter = Within::new(0.0, 1.0), help = "Rate of increases (0 to 1)")]
    rate: f64,
    #[switchboard(mandatory, argname = "integer", help = "User ID")]
    i: i32,
    #[switchboard(mandatory, argname = "SIZE", converter = Within::new(1, 1024), help = "Maximum size of data")]
    size: i16,
    #[switchboard(short = 'v', help = "Display detailed processes")]
    verbose: bool,
    #[switchboard(mandatory, short = 'I', converter = OneOf::new("xyz"), help = "Input type ('x', 'y' or 'z')")]
    input: char,
    #[switchboard(mandatory, short = 'T', argname = "UINT", help = "Number of trials")]
    trials: u32,
    #[switchboard(mandatory, short = 'V', argname = "-100 to 100", converter = Within::new(-100, 100), help = "Relative volume")]
    volume: i32,
}

fn main() {
    let o = Options::switchboard_parse();

    println!("size = {}", o.size);
    println!("i = {}", o.i);
    println!("file = {}", o.file);
    println!("rate = {}", o.rate);
    println!("verbose = {}", o.verbose);
    println!("input = {}", o.input);
    println!("trials = {}", o.trials);
    println!("volume = {}", o.volume);
}
