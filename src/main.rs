use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::process;

use karatsuba::input;
use karatsuba::math::karatsuba::multiply;
use karatsuba::render;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input_path = args.next().unwrap_or_else(|| "input.txt".to_string());
    let output_path = args.next().unwrap_or_else(|| "output.txt".to_string());

    let reader = match File::open(&input_path) {
        Ok(file) => BufReader::new(file),
        Err(err) => {
            eprintln!("cannot open {input_path}: {err}");
            process::exit(1);
        }
    };

    let (x, y) = match input::read_operands(reader) {
        Ok(operands) => operands,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let result = multiply(&x, &y);

    let file = match File::create(&output_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("cannot create {output_path}: {err}");
            process::exit(1);
        }
    };
    let mut writer = BufWriter::new(file);
    if let Err(err) = render::write_trace(&mut writer, &result).and_then(|_| writer.flush()) {
        eprintln!("cannot write {output_path}: {err}");
        process::exit(1);
    }

    println!("{} x {} = {}", result.x, result.y, result.product);
}
