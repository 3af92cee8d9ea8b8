//! The results-ready notification template.

/// Fields rendered into the notification sent when a record is created.
#[derive(Debug)]
pub struct ResultsReadyEmail<'a> {
    pub name: &'a str,
    pub test_type: &'a str,
    pub result_summary: &'a str,
}

impl ResultsReadyEmail<'_> {
    pub fn subject(&self) -> String {
        format!("Your {} Results Are Ready", self.test_type)
    }

    pub fn body(&self) -> String {
        format!(
            "Hello {},\n\nYour {} results are: {}.\n\nThank you and have a great day.",
            self.name, self.test_type, self.result_summary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_subject_with_test_type() {
        let email = ResultsReadyEmail {
            name: "Jane Doe",
            test_type: "Blood Panel",
            result_summary: "Normal",
        };
        assert_eq!(email.subject(), "Your Blood Panel Results Are Ready");
    }

    #[test]
    fn should_render_body_template_verbatim() {
        let email = ResultsReadyEmail {
            name: "Jane Doe",
            test_type: "Blood Panel",
            result_summary: "Normal",
        };
        assert_eq!(
            email.body(),
            "Hello Jane Doe,\n\nYour Blood Panel results are: Normal.\n\nThank you and have a great day."
        );
    }
}
