use std::path::Path;

use crate::error::Result;

use super::RuleSet;

/// Name reported in errors and logs for the embedded rule set.
pub const BUNDLED_RULES_ORIGIN: &str = "<bundled default rules>";

/// Load the rule set embedded in the binary.
///
/// # Errors
/// Only fails if the embedded document itself is broken.
pub fn bundled_rule_set() -> Result<RuleSet> {
    RuleSet::from_toml_str(DEFAULT_RULES, Path::new(BUNDLED_RULES_ORIGIN))
}

/// Default rules, also a template for custom rules files.
pub const DEFAULT_RULES: &str = r#"
[general]
# Blank lines and comments.
ignore_regex = '^\s*(#.*)?$'
# Group 1: instruction token, group 2: argument text.
instruction_regex = '^([A-Za-z]+)\s+(.*)$'
valid_instructions = [
    "FROM", "MAINTAINER", "RUN", "CMD", "LABEL", "EXPOSE", "ENV", "ADD",
    "COPY", "ENTRYPOINT", "VOLUME", "USER", "WORKDIR", "ARG", "ONBUILD",
    "STOPSIGNAL", "HEALTHCHECK", "SHELL",
]

[[line_rules.FROM]]
regex = ':latest(\s|$)|^(--\S+\s+)*[^\s:@-][^\s:@]*(\s|$)'
severity = "info"
message = "Base image uses a floating tag"
description = "An untagged or ':latest' base image changes underneath the build. Pin a version for reproducible images."
reference_url = "https://docs.docker.com/engine/reference/builder/#from"

[[line_rules.FROM]]
regex = '^(--\S+\s+)*[^\s:@-][^\s:@]*(\s|$)'
severity = "warning"
message = "No tag specified for the base image"
description = "Without a tag the base image resolves to 'latest' at build time."
reference_url = "https://docs.docker.com/engine/reference/builder/#from"

[[line_rules.RUN]]
regex = '\b(openssh-server|sshd)\b'
severity = "warning"
message = "SSH server installed in the image"
description = "Use 'docker exec' to enter the container's process namespace instead of running an SSH daemon."
reference_url = "https://docs.docker.com/engine/reference/commandline/exec/"

[[line_rules.RUN]]
regex = 'apt-get\s+(-\S+\s+)*(dist-)?upgrade\b'
severity = "warning"
message = "Package upgrade inside the image"
description = "Upgrading all packages makes the build non-reproducible. Rebuild from a newer base image instead."

[[line_rules.RUN]]
regex = '(^|[\s;&|])sudo\s'
severity = "warning"
message = "sudo used in RUN"
description = "RUN already executes as the current USER. Switch users with USER instead of sudo."

[[line_rules.ADD]]
regex = '^(--\S+\s+)*https?://'
severity = "info"
message = "ADD fetches a remote URL"
description = "Prefer downloading with curl or wget in a RUN instruction so the file can be verified and removed in the same layer."
reference_url = "https://docs.docker.com/engine/reference/builder/#add"

[[global_counts]]
instruction = "FROM"
expected_count = 1
comparison = "at_least"
severity = "error"
message = "Missing base image: no FROM instruction"
reference_url = "https://docs.docker.com/engine/reference/builder/#from"

[[global_counts]]
instruction = "MAINTAINER"
expected_count = 1
comparison = "at_least"
severity = "warning"
message = "No MAINTAINER instruction: author metadata is missing"

[[global_counts]]
instruction = "USER"
expected_count = 1
comparison = "at_least"
severity = "warning"
message = "No USER instruction: the container will run as root"
description = "Drop privileges with a USER instruction before the final CMD or ENTRYPOINT."
reference_url = "https://docs.docker.com/engine/reference/builder/#user"

[[global_counts]]
instruction = "EXPOSE"
expected_count = 1
comparison = "at_least"
severity = "warning"
message = "No ports exposed"
reference_url = "https://docs.docker.com/engine/reference/builder/#expose"

[[global_counts]]
instruction = "EXPOSE"
expected_count = 0
comparison = "at_most"
severity = "info"
message = "Container exposes ports"
description = "EXPOSE only documents ports. Publish them with -p or --publish when running the container."
reference_url = "https://docs.docker.com/engine/reference/builder/#expose"
"#;

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
