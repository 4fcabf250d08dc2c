#[cfg(target_arch = "wasm32")]
fn main() {
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("neurox_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::PathBuf;

    use neurox_engine::model::{AnalysisResult, ScenarioId};
    use neurox_engine::visual::{ViewState, project_view, timeline_for};
    use neurox_engine::{Engine, parse, sample};
    use serde::Serialize;

    const USAGE: &str = r#"neurox_cli (neurox-engine)

USAGE:
  neurox_cli project [options]
  neurox_cli timeline [options]
  neurox_cli summary [options]

OPTIONS:
  --input <path>     Analysis payload (JSON); defaults to the bundled simulated analysis
  --scenario <a|b>   Scenario to use (default: a)
  --time <index>     Time index for `project` (default: 0)
  --no-treatment     Project without the treatment effect
  --raw              `project`: print projector output keyed by region id
  -h, --help         Show this help
"#;

    #[derive(Debug)]
    struct Options {
        input: Option<PathBuf>,
        view: ViewState,
        raw: bool,
    }

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let Some(command) = args.next() else {
            print_usage();
            return Ok(());
        };

        if matches!(command.as_str(), "-h" | "--help" | "help") {
            print_usage();
            return Ok(());
        }

        let Some(options) = parse_options(&mut args)? else {
            print_usage();
            return Ok(());
        };

        match command.as_str() {
            "project" => cmd_project(&options),
            "timeline" => cmd_timeline(&options),
            "summary" => cmd_summary(&options),
            other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn parse_options(args: &mut Args) -> Result<Option<Options>, String> {
        let mut options = Options {
            input: None,
            view: ViewState::default(),
            raw: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--input" => options.input = Some(PathBuf::from(args.value("--input")?)),
                "--scenario" => {
                    let scenario = args
                        .value("--scenario")?
                        .parse::<ScenarioId>()
                        .map_err(|e| e.to_string())?;
                    options.view = options.view.with_scenario(scenario);
                }
                "--time" => {
                    let raw = args.value("--time")?;
                    let time_index = raw
                        .parse::<usize>()
                        .map_err(|e| format!("invalid --time `{raw}`: {e}"))?;
                    options.view = options.view.with_time_index(time_index);
                }
                "--no-treatment" => options.view = options.view.with_treatment(false),
                "--raw" => options.raw = true,
                "-h" | "--help" => return Ok(None),
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        Ok(Some(options))
    }

    fn load(options: &Options) -> Result<AnalysisResult, String> {
        match options.input.as_deref() {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .map_err(|e| format!("read {}: {e}", path.display()))?;
                parse::parse_str(&json).map_err(|e| format!("{}: {e}", path.display()))
            }
            None => sample::simulated_analysis().map_err(|e| e.to_string()),
        }
    }

    fn cmd_project(options: &Options) -> Result<(), String> {
        let analysis = load(options)?;

        if options.raw {
            let projections = project_view(&analysis, options.view).map_err(|e| e.to_string())?;
            return print_json(&projections);
        }

        let mut engine = Engine::new();
        engine.load_analysis_result(analysis);
        engine.apply_view(options.view).map_err(|e| e.to_string())?;
        let states = engine.region_states().map_err(|e| e.to_string())?;

        if let Some(label) = engine.time_label() {
            eprintln!(
                "scenario {} @ {label} (treatment {})",
                options.view.scenario,
                if options.view.show_treatment { "on" } else { "off" }
            );
        }
        print_json(&states)
    }

    fn cmd_timeline(options: &Options) -> Result<(), String> {
        let analysis = load(options)?;
        let series = timeline_for(&analysis, options.view.scenario).map_err(|e| e.to_string())?;
        print_json(&series)
    }

    fn cmd_summary(options: &Options) -> Result<(), String> {
        let mut engine = Engine::new();
        engine.load_analysis_result(load(options)?);
        let summary = engine.treatment_plan_summary().map_err(|e| e.to_string())?;
        print_json(&summary)
    }

    fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
        let text = serde_json::to_string_pretty(value).map_err(|e| format!("serialize: {e}"))?;
        println!("{text}");
        Ok(())
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        }
    }
}
