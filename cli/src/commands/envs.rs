//! Envs command - Lists the environment registry.

use assistant_domain::EnvironmentType;

/// Execute the envs command
pub fn execute() {
    print!("{}", render());
}

/// One `<name>  <file>` row per environment, in registry order
pub fn render() -> String {
    let width = EnvironmentType::all()
        .iter()
        .map(|env| env.name().len())
        .max()
        .unwrap_or(0);

    EnvironmentType::all()
        .iter()
        .map(|env| format!("{:<width$}  {}\n", env.name(), env.env_file_name()))
        .collect()
}
