pub mod graph;
pub mod layout;
pub mod render;
pub mod site;

use colored::Colorize;

/// Startup banner, shown unless --quiet is passed.
pub fn print_banner() {
    let banner = r#"
    ███╗   ██╗ █████╗ ██╗   ██╗███╗   ███╗ █████╗ ██████╗
    ████╗  ██║██╔══██╗██║   ██║████╗ ████║██╔══██╗██╔══██╗
    ██╔██╗ ██║███████║██║   ██║██╔████╔██║███████║██████╔╝
    ██║╚██╗██║██╔══██║╚██╗ ██╔╝██║╚██╔╝██║██╔══██║██╔═══╝
    ██║ ╚████║██║  ██║ ╚████╔╝ ██║ ╚═╝ ██║██║  ██║██║
    ╚═╝  ╚═══╝╚═╝  ╚═╝  ╚═══╝  ╚═╝     ╚═╝╚═╝  ╚═╝╚═╝"#;
    println!("{}", banner.bright_blue().bold());
    println!(
        "    {}\n",
        "force-directed site navigation map viewer".bright_cyan()
    );
}
