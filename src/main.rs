mod domain;
mod usecase;
mod interface_adapter;
mod infrastructure;
mod shared;

use crate::interface_adapter::adapter::clock_adapter_factory;
use crate::usecase::render_usecase::RenderUsecase;
use crate::usecase::timer_usecase::TimerUsecase;
use crate::interface_adapter::controller::timer_controller::TimerController;
use crate::infrastructure::tui::app_runner;
use crate::shared::config::Config;
use crate::shared::logging;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(&config)?;

    // Infrastructure concrete adapters
    let clock = clock_adapter_factory::create_clock_adapter();

    // Usecases (depend on port traits via generics)
    let timer = TimerUsecase::new(clock, config.default_interval());
    let render = RenderUsecase::new(config.warn_threshold(), config.display_rounding());

    // Controller
    let controller = TimerController::new(timer, render);

    // Run TUI
    app_runner::run(controller, &config)?;

    Ok(())
}
