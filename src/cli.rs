// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "himekuri v{} - Special day tracker and Japanese calendar toolkit",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>] [command]", binary_name);
    println!();
    println!("COMMANDS:");
    println!("    list                        Show all special days (default)");
    println!("    add <name> <yyyy-mm-dd>     Add a day; an existing name is replaced");
    println!("    remove <index>              Remove the day at <index>");
    println!("    up <index>                  Move the day at <index> one row up");
    println!("    down <index>                Move the day at <index> one row down");
    println!("    sidemenu [on|off]           Show or set the side menu preference");
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("EXAMPLES:");
    println!("    {} add 誕生日 1980-05-26        Track a birthday", binary_name);
    println!(
        "    {} list                         Gregorian and era dates plus elapsed time",
        binary_name
    );
    println!(
        "    {} up 2                         Reorder: indices are the ones list prints",
        binary_name
    );
}
