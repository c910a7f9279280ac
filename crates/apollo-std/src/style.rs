use console::style;

pub enum Style {
    Link,    // URLs
    Command, // Commands, flags and env variable keys
    Path,    // File paths
    Failure,
    Warning,
    Notice,
    InfoPrefix,    // "==>" text
    WarningPrefix, // "warning:" text
    ErrorPrefix,   // "error:" and "error[code]:" text
    SuccessPrefix,
    Heading,
    Success,
}

impl Style {
    pub fn paint<S: AsRef<str>>(&self, message: S) -> String {
        let message_ref = message.as_ref();

        if is_no_color_set() {
            return message_ref.to_string();
        }

        match &self {
            Style::Link => style(message_ref).cyan().underlined(),
            Style::Command | Style::Warning | Style::WarningPrefix => style(message_ref).yellow(),
            Style::Failure => style(message_ref).red(),
            Style::Notice => style(message_ref).cyan(),
            Style::InfoPrefix => style(message_ref).blue().bold(),
            Style::ErrorPrefix => style(message_ref).red().bold(),
            Style::SuccessPrefix => style(message_ref).green().bold(),
            Style::Path | Style::Heading => style(message_ref).bold(),
            Style::Success => style(message_ref).green(),
        }
        .to_string()
    }
}

fn is_no_color_set() -> bool {
    is_bool_env_var_set("NO_COLOR") || is_bool_env_var_set("APOLLO_NO_COLOR")
}

fn is_bool_env_var_set(key: &str) -> bool {
    !matches!(
        std::env::var(key).as_deref(),
        Err(..) | Ok("") | Ok("0") | Ok("false") | Ok("False") | Ok("FALSE")
    )
}
