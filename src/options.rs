pub struct Args {
    generations: usize,
    input_file: String,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");

        let matches = match opts.parse(args.iter().map(T::as_ref)) {
            Ok(matches) => matches,
            Err(err) => {
                eprintln!("Error: {err}");
                print_usage(&opts);
                return None;
            }
        };
        if matches.opt_present("help") || matches.free.len() != 2 {
            print_usage(&opts);
            return None;
        }

        let generations = match matches.free[0].parse::<usize>() {
            Ok(generations) => generations,
            Err(_) => {
                eprintln!("Error: GENERATIONS must be a valid positive integer");
                return None;
            }
        };
        Some(Self {
            generations,
            input_file: matches.free[1].clone(),
        })
    }

    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn input_file(&self) -> &str {
        &self.input_file
    }
}

fn print_usage(opts: &getopts::Options) {
    let brief = "Conway's Game of Life\n\n\
                 Usage: glife GENERATIONS INPUT_FILE\n\n  \
                 GENERATIONS is the number of generations the game should run\n  \
                 INPUT_FILE  is a file containing an initial board state";
    eprintln!("{}", opts.usage(brief));
}
