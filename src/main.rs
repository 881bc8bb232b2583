use std::error::Error;
use std::io;

use tracing::{error, info};

use number_guesser::config::game::GameConfig;
use number_guesser::config::log::{self, LogConfig};
use number_guesser::config::service::ServiceConfig;
use number_guesser::game::Session;
use number_guesser::service::log::init_logger;
use number_guesser::terminal::Console;

type MainResult = Result<(), Box<dyn Error>>;

fn main() -> MainResult {
    let log_config = ServiceConfig::<LogConfig>::new("log", log::DEFAULT_CONFIG).read();
    let _guards = init_logger(&log_config);

    info!("已启动NumberGuesser v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::load();
    let color = config.color;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock()).with_color(color);

    let mut session = Session::new(console, config, rand::thread_rng());
    let summary = session.run().map_err(|e| {
        error!("游戏异常结束: {}", e);
        e
    })?;

    info!(
        "游戏结束, 共{}轮, 胜利{}轮, 失败{}轮",
        summary.rounds, summary.wins, summary.losses
    );

    Ok(())
}
