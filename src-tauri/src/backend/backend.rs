use crate::calculations::input_sanitizer::sanitize_number_input;
use crate::calculations::{solve, Solution};
use serde::Serialize;
use serde_json::json;

/// Field contents as the form should display them after a command.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    pub a: String,
    pub b: String,
    pub c: String,
    pub n: String,
    pub error: String,
}

pub struct CommandHandler {
    a: String,
    b: String,
    c: String,
    n: String,
    error: String,
    domain_message: String,
}

impl CommandHandler {
    pub fn new(domain_message: &str) -> CommandHandler {
        CommandHandler {
            a: String::new(),
            b: String::new(),
            c: String::new(),
            n: String::new(),
            error: String::new(),
            domain_message: domain_message.to_string(),
        }
    }

    pub fn update_measurements(&mut self, a: &str, b: &str, c: &str) -> Result<String, String> {
        self.a = sanitize_number_input(a);
        self.b = sanitize_number_input(b);
        self.c = sanitize_number_input(c);
        self.recalculate();
        Ok(self.result_json("Measurements updated"))
    }

    pub fn update_measurement(&mut self, field: &str, value: &str) -> Result<String, String> {
        let target = match field {
            "a" => &mut self.a,
            "b" => &mut self.b,
            "c" => &mut self.c,
            _ => {
                let error_message = format!("Unknown measurement field: {}", field);
                log::error!("{}", error_message);
                return Err(error_message);
            }
        };
        *target = sanitize_number_input(value);
        self.recalculate();
        Ok(self.result_json("Measurement updated"))
    }

    pub fn reset(&mut self) -> Result<String, String> {
        let domain_message = std::mem::take(&mut self.domain_message);
        *self = CommandHandler::new(&domain_message);
        log::info!("Fields cleared.");
        Ok(self.result_json("Fields cleared"))
    }

    pub fn form_state(&self) -> FormState {
        FormState {
            a: self.a.clone(),
            b: self.b.clone(),
            c: self.c.clone(),
            n: self.n.clone(),
            error: self.error.clone(),
        }
    }

    fn recalculate(&mut self) {
        let solution = solve(&self.a, &self.b, &self.c);

        self.n = solution.result_text();
        self.error = match solution {
            Solution::Invalid(_) => self.domain_message.clone(),
            _ => String::new(),
        };

        match solution {
            Solution::Value(_) => log::debug!("N = {}", self.n),
            Solution::Invalid(_) => log::debug!("Rejected: b = {}, c = {}", self.b, self.c),
            Solution::Empty => {}
        }
    }

    fn result_json(&self, message: &str) -> String {
        json!({
            "success": true,
            "message": message,
            "a": self.a,
            "b": self.b,
            "c": self.c,
            "n": self.n,
            "error": self.error,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::DOMAIN_VIOLATION_MESSAGE;
    use serde_json::Value;

    fn parse(result: Result<String, String>) -> Value {
        serde_json::from_str(&result.unwrap()).unwrap()
    }

    #[test]
    fn live_update_reports_sanitized_fields_and_result() {
        let mut handler = CommandHandler::new(DOMAIN_VIOLATION_MESSAGE);
        let value = parse(handler.update_measurements("10", "8a", "6"));
        assert_eq!(value["success"], true);
        assert_eq!(value["b"], "8");
        assert_eq!(value["n"], "7.6269");
        assert_eq!(value["error"], "");
    }

    #[test]
    fn domain_violation_uses_the_skin_message() {
        let mut handler = CommandHandler::new("b² ≥ c² じゃないと無理だよ…");
        let value = parse(handler.update_measurements("5", "3", "5"));
        assert_eq!(value["n"], "");
        assert_eq!(value["error"], "b² ≥ c² じゃないと無理だよ…");
    }

    #[test]
    fn typing_field_by_field() {
        let mut handler = CommandHandler::new(DOMAIN_VIOLATION_MESSAGE);
        handler.update_measurement("a", "5").unwrap();
        handler.update_measurement("b", "4").unwrap();
        assert_eq!(handler.form_state().n, "");
        handler.update_measurement("c", "4").unwrap();
        assert_eq!(handler.form_state().n, "6.4031");

        handler.update_measurement("c", "9").unwrap();
        let state = handler.form_state();
        assert_eq!(state.n, "");
        assert_eq!(state.error, DOMAIN_VIOLATION_MESSAGE);

        // Half-typed input clears the error instead of flashing a new one.
        handler.update_measurement("c", ".").unwrap();
        assert_eq!(handler.form_state().error, "");
    }

    #[test]
    fn form_agrees_with_solve() {
        let big = format!("1{}", "0".repeat(200));
        let cases = [
            ("10", "8", "6"),
            ("5", "4", "4"),
            ("1", "3", "5"),
            ("", "8", "6"),
            ("1..2", "8", "6"),
            ("1", big.as_str(), "1"),
            ("1", big.as_str(), big.as_str()),
        ];
        let mut handler = CommandHandler::new(DOMAIN_VIOLATION_MESSAGE);
        for (a, b, c) in cases {
            handler.update_measurements(a, b, c).unwrap();
            let state = handler.form_state();
            let solution = solve(a, b, c);
            assert_eq!(state.n, solution.result_text(), "{} {} {}", a, b, c);
            assert_eq!(state.error, solution.error_text(), "{} {} {}", a, b, c);
        }
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut handler = CommandHandler::new(DOMAIN_VIOLATION_MESSAGE);
        assert!(handler.update_measurement("d", "1").is_err());
    }

    #[test]
    fn reset_clears_everything_but_keeps_the_message() {
        let mut handler = CommandHandler::new("custom");
        handler.update_measurements("5", "3", "5").unwrap();
        let value = parse(handler.reset());
        assert_eq!(value["message"], "Fields cleared");
        assert_eq!(handler.form_state(), FormState::default());

        handler.update_measurements("5", "3", "5").unwrap();
        assert_eq!(handler.form_state().error, "custom");
    }
}
