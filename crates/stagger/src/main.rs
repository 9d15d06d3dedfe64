use clap::{Parser, Subcommand};
use stagger::SOCKET_PATH;
use stagger::builder::TimelineBuilder;
use stagger::label::{DEFAULT_CYCLES, cycle_duration, cycle_sequence};
use stagger::layout::MenuLayout;
use stagger::scene::Scene;
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "stagger", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Open the menu
    Show,
    /// Close the menu
    Hide,
    /// Open the menu if closed, close it if open
    Toggle,
    /// Print the opening schedule for a menu shape
    Plan {
        /// Number of menu entries
        #[arg(short, long, default_value_t = 5)]
        items: usize,

        /// Number of decorative layers
        #[arg(short, long, default_value_t = 2)]
        layers: usize,

        /// Number of social links
        #[arg(short, long, default_value_t = 0)]
        socials: usize,

        /// Leave out the entry numbering
        #[arg(long)]
        no_numbering: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show => send_command("show"),
        Commands::Hide => send_command("hide"),
        Commands::Toggle => send_command("toggle"),
        Commands::Plan {
            items,
            layers,
            socials,
            no_numbering,
        } => {
            print_plan(MenuLayout {
                items,
                layers,
                numbering: !no_numbering,
                social_title: socials > 0,
                social_links: socials,
            });
            Ok(())
        }
    }
}

fn print_plan(layout: MenuLayout) {
    let mut scene = Scene::new(&layout, 100.0);
    let timeline = TimelineBuilder::new(&layout).build(&mut scene);

    println!("{:>8}  {:>8}  property", "start", "length");
    for tween in timeline.shape() {
        println!(
            "{:>7.3}s  {:>7.3}s  {}",
            tween.start, tween.duration, tween.property
        );
    }
    println!("total {:.3}s", timeline.duration());

    let caption = cycle_sequence("Menu", "Close", DEFAULT_CYCLES);
    println!(
        "caption {} over {:.2}s",
        caption.join(" > "),
        cycle_duration(caption.len())
    );
}

fn send_command(cmd: &str) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to the menu daemon at {}: {}. Is slideout running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", cmd)?;
    Ok(())
}
