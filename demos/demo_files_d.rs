use switchboard::{derive::*, Bound};

#[derive(Default, SwitchboardParser)]
#[switchboard(program = "files", standalone = Bound::Lower(1), label = "[FILES...]")]
struct Parameters {
    #[switchboard(argname = "MODE", mandatory, help = "Mode of the program")]
    mode: String,
    #[switchboard(argname = "UINT", default = 1000, help = "Number of trials")]
    trials: usize,
    #[switchboard(standalones)]
    files: Vec<String>,
}

fn main() {
    let parameters = Parameters::switchboard_parse();

    println!("Mode: {}", parameters.mode);
    println!("Trials: {}", parameters.trials);
    for (i, file) in parameters.files.iter().enumerate() {
        println!("File[{}/{}]: {file}", i + 1, parameters.files.len());
    }
}
