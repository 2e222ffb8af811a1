use anyhow::Context;
use gnuflag::{
    CommandGroup, CommandOption, Flags, StoreFlag, Tags, bool_type, int_type, parse_cli,
    render_help, string_container_type, string_type,
};
use lazy_format::lazy_format;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut string = String::from("I was untouched");
    let mut optional = String::from("I'm optional");
    let mut list: Vec<String> = Vec::new();
    let mut flag = false;
    let mut int: i32 = 10;

    let string_default = string.clone();

    let mut groups = [
        CommandGroup::new(
            "Default",
            vec![
                CommandOption::new(
                    Tags::LongShort {
                        long: "int",
                        short: 'i',
                    },
                    Flags::REQUIRED_ARGUMENT,
                    int_type(&mut int, Some(10)),
                    "Set the Int value.",
                ),
                CommandOption::new(
                    Tags::LongShort {
                        long: "bool",
                        short: 'b',
                    },
                    Flags::NO_ARGUMENT,
                    bool_type(&mut flag, StoreFlag::True, Some(false)),
                    "Enable the bool switch.",
                ),
            ],
        ),
        CommandGroup::new(
            "Extended",
            vec![
                CommandOption::new(
                    Tags::LongShort {
                        long: "string",
                        short: 's',
                    },
                    Flags::REQUIRED_ARGUMENT,
                    string_type(&mut string, Some(string_default.as_str())),
                    "Set the String value.",
                ),
                CommandOption::new(
                    Tags::LongShort {
                        long: "ostring",
                        short: 'o',
                    },
                    Flags::OPTIONAL_ARGUMENT | Flags::REPEATABLE,
                    string_type(&mut optional, Some("Seen, i was seen")),
                    "Set the optional String value.",
                ),
                CommandOption::new(
                    Tags::LongShort {
                        long: "cstring",
                        short: 'c',
                    },
                    Flags::REQUIRED_ARGUMENT | Flags::REPEATABLE,
                    string_container_type(&mut list),
                    "Add value to list of strings.",
                ),
            ],
        ),
    ];

    println!("My options: ");
    render_help(&groups).context("failed to print help")?;

    let next = parse_cli(&args, &mut groups).context("invalid option table")?;
    drop(groups);

    log::debug!("first operand is at index {next}");

    println!("Hello World!");
    println!("myStringVar: {string}");
    println!("optionalVar: {optional}");
    println!("myFlag:      {flag}");
    println!("myInt:       {int}");

    println!("container:   ");
    for item in &list {
        println!("\t{item}");
    }

    let operand = lazy_format!(match (args.get(next)) {
        Some(operand) => "{operand}",
        None => "(none)",
    });

    println!("next in argv: {operand}");

    Ok(())
}
