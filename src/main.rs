use std::env::args;
use std::process::exit;
use std::str::FromStr;

use prettytable::format::Alignment;
use prettytable::{Cell, Row, Table};

use cvd_sim::color::{hex, Color8, Vision};
use cvd_sim::{brettel, simulate, Model};

fn usage() -> ! {
    eprintln!("usage: cvd-sim <color> [vision [severity]]");
    eprintln!("  color     hex sRGB color, e.g. '#008000'");
    eprintln!("  vision    normal, protanopia, protanomaly, deuteranopia, deuteranomaly,");
    eprintln!("            tritanopia, tritanomaly, achromatopsia, achromatomaly");
    eprintln!("  severity  Brettel severity in [0,1]; needs a protan/deutan/tritan vision");
    exit(2);
}

fn print_all_visions(color: Color8) {
    let mut t = Table::new();
    t.set_format(*prettytable::format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    let mut headings = vec![hex(color)];
    headings.extend(Model::ALL.iter().map(|m| m.to_string()));
    t.add_row(Row::new(
        headings
            .into_iter()
            .map(|s| {
                let mut c = Cell::new(&s);
                c.align(Alignment::CENTER);
                return c;
            })
            .collect(),
    ));

    for vision in Vision::ALL {
        let mut row = Row::new(vec![Cell::new(vision.name())]);
        for model in Model::ALL {
            row.add_cell(Cell::new(&hex(simulate(color, vision, model))));
        }
        t.add_row(row);
    }
    t.printstd();
}

fn print_one_vision(color: Color8, vision: Vision, severity: Option<f32>) {
    for model in Model::ALL {
        println!("{:<8} {}", model, hex(simulate(color, vision, model)));
    }
    let Some(severity) = severity else { return };
    match vision.dichromacy() {
        Some(axis) => {
            let c = brettel::simulate(color, axis, severity);
            println!("{:<8} {} (severity {})", "brettel", hex(c), severity);
        }
        None => {
            eprintln!("severity only applies to protan/deutan/tritan visions");
            exit(2);
        }
    }
}

fn main() {
    let argv: Vec<String> = args().skip(1).collect();
    if argv.is_empty() || argv.len() > 3 {
        usage();
    }

    let color = match Color8::from_str(&argv[0]) {
        Ok(c) => c,
        Err(_) => {
            eprintln!("invalid color {:?}, expected a hex color like '#008000'", argv[0]);
            exit(2);
        }
    };

    if argv.len() == 1 {
        print_all_visions(color);
        return;
    }

    let vision = match argv[1].parse::<Vision>() {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{}", err);
            exit(2);
        }
    };
    let severity = match argv.get(2) {
        None => None,
        Some(s) => match s.parse::<f32>() {
            Ok(v) => Some(v),
            Err(_) => {
                eprintln!("invalid severity {:?}, expected a number in [0,1]", s);
                exit(2);
            }
        },
    };
    print_one_vision(color, vision, severity);
}
