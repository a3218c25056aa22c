use std::fmt;
use std::io::IsTerminal;

const NO_TTY_VAR: &str = "DEBBUMP_NO_TTY";
const FORCE_TTY_VAR: &str = "DEBBUMP_FORCE_TTY";

const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
    "TF_BUILD",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonInteractiveReason {
    ExplicitDisable,
    CiDetected { env_var: String },
    NoTerminal,
}

impl fmt::Display for NonInteractiveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitDisable => write!(f, "{NO_TTY_VAR} is set"),
            Self::CiDetected { env_var } => {
                write!(f, "CI detected via {env_var}; set {FORCE_TTY_VAR} to override")
            }
            Self::NoTerminal => f.write_str("stdin is not a terminal"),
        }
    }
}

pub fn non_interactive_reason() -> Option<NonInteractiveReason> {
    if std::env::var(NO_TTY_VAR).is_ok() {
        return Some(NonInteractiveReason::ExplicitDisable);
    }

    if std::env::var(FORCE_TTY_VAR).is_ok() {
        return None;
    }

    if let Some(env_var) = detect_ci_env_var() {
        return Some(NonInteractiveReason::CiDetected { env_var });
    }

    if !std::io::stdin().is_terminal() {
        return Some(NonInteractiveReason::NoTerminal);
    }

    None
}

fn detect_ci_env_var() -> Option<String> {
    CI_ENV_VARS
        .iter()
        .find(|var| std::env::var(var).is_ok())
        .map(|var| (*var).to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_env<F, R>(vars: &[(&str, &str)], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().expect("mutex poisoned");

        let mut old_values: Vec<(&str, Option<String>)> = Vec::new();

        for var in CI_ENV_VARS.iter().chain(&[NO_TTY_VAR, FORCE_TTY_VAR]) {
            old_values.push((*var, std::env::var(var).ok()));
            // SAFETY: Test code runs sequentially with ENV_MUTEX held.
            unsafe { std::env::remove_var(var) };
        }

        for (key, value) in vars {
            // SAFETY: Test code runs sequentially with ENV_MUTEX held.
            unsafe { std::env::set_var(key, value) };
        }

        let result = f();

        for (key, _) in vars {
            // SAFETY: Test code runs sequentially with ENV_MUTEX held.
            unsafe { std::env::remove_var(key) };
        }
        for (key, old_value) in old_values {
            if let Some(v) = old_value {
                // SAFETY: Test code runs sequentially with ENV_MUTEX held.
                unsafe { std::env::set_var(key, v) };
            }
        }

        result
    }

    #[test]
    fn no_ci_vars_detected_when_clear() {
        with_env(&[], || {
            assert!(detect_ci_env_var().is_none());
        });
    }

    #[test]
    fn detects_each_ci_var() {
        for var in CI_ENV_VARS {
            with_env(&[(*var, "true")], || {
                assert_eq!(detect_ci_env_var(), Some((*var).to_string()));
            });
        }
    }

    #[test]
    fn no_tty_takes_highest_priority() {
        with_env(&[(NO_TTY_VAR, "1"), (FORCE_TTY_VAR, "1"), ("CI", "true")], || {
            assert_eq!(
                non_interactive_reason(),
                Some(NonInteractiveReason::ExplicitDisable)
            );
        });
    }

    #[test]
    fn force_tty_takes_priority_over_ci_detection() {
        with_env(&[("CI", "true"), (FORCE_TTY_VAR, "1")], || {
            assert!(non_interactive_reason().is_none());
        });
    }

    #[test]
    fn reason_names_the_variable() {
        let reason = NonInteractiveReason::CiDetected {
            env_var: "TRAVIS".to_string(),
        };

        let msg = reason.to_string();

        assert!(msg.contains("TRAVIS"));
        assert!(msg.contains(FORCE_TTY_VAR));
    }

    #[test]
    fn ci_detection_returns_correct_env_var() {
        with_env(&[("GITLAB_CI", "true")], || {
            assert_eq!(
                non_interactive_reason(),
                Some(NonInteractiveReason::CiDetected {
                    env_var: "GITLAB_CI".to_string()
                })
            );
        });
    }
}
