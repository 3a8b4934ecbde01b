mod command;
mod data;
mod tui;
mod view;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    command::run()
}
