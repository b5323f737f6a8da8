use switchboard::{Bound, CommandLineParser, Scalar, Switch};

fn main() {
    let mut mode: String = String::default();
    let mut trials: usize = 0;

    let mut clp = CommandLineParser::new("files")
        .add(
            Switch::new(Scalar::new(&mut mode), "mode", None)
                .argname("MODE")
                .mandatory()
                .help("Mode of the program"),
        )
        .add(
            Switch::new(Scalar::new(&mut trials).default(1000), "trials", None)
                .argname("UINT")
                .help("Number of trials"),
        )
        .standalone(Bound::Lower(1), "[FILES...]")
        .build();

    let files = clp.parse();
    drop(clp);

    println!("Mode: {mode}");
    println!("Trials: {trials}");
    for (i, file) in files.iter().enumerate() {
        println!("File[{}/{}]: {file}", i + 1, files.len());
    }
}
