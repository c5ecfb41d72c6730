use chroma::init::App;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = App::init()?;
    app.run()
}
