//! Prompt construction for roadmap generation.
//!
//! The instruction block and the worked example define the exact text layout
//! the AI is asked to produce. The glyph-avoidance rule is generated from
//! [`BULLET_GLYPHS`] so the instructions and the response parser cannot
//! drift apart.

use std::fmt::Write;

use crate::domain::RoadmapRequest;

/// Leading characters that mark a line as a markdown/bullet artifact.
///
/// Shared by the prompt instructions (which tell the AI to avoid them) and
/// the response parser (which drops lines starting with them).
pub const BULLET_GLYPHS: [char; 5] = ['*', '#', '•', '∙', '·'];

const OUTPUT_RULES: &str = r#"Generate a detailed project roadmap from the input data.

Output rules:
- do not use tables or markdown tables
- do not use json or lists inside tables
- do not add extra headings
- use plain text with line breaks only
- each section must start exactly as shown in the example below
- use only the exact text format shown in the example below

Required conditions:
- capacity is the total team capacity for the whole project; the sum of employees assigned across phases must include every employee and must never exceed it
- start_date and end_date bound the whole project; the elapsed time across phases must never exceed that duration
- if the resources field names employees, use those exact names everywhere employees are assigned
- if any input data field is given, you cannot change it
- if capacity or time is too small for all phases, generate the roadmap only for frontend, backend and database, and state that capacity or time is too small to include all phases
- if the project completes before the end date, mention it
"#;

const EXAMPLE_ROADMAP: &str = r#"Smart Inventory Management System — Project Roadmap
Project Details

Project Name: Smart Inventory Management System

Start Date: 01 March 2026

End Date: 30 June 2026

Total Team Capacity: 6 employees

This roadmap explains how the Smart Inventory Management System will be designed, developed, tested, and deployed within the given timeline and team capacity.

Phase-wise Execution Plan
Phase 1: Requirement Analysis & Planning

Start Date: 01 March 2026

End Date: 14 March 2026

Employees Assigned: 2

Subtasks:

Understand inventory workflows (stock in/out, suppliers, alerts)

Identify user roles (admin, staff, manager)

Define system features and reports

Prepare requirement and project planning documents

Outcome:
Clear and approved requirements for the Smart Inventory Management System.

Phase 2: Frontend Development

Start Date: 15 March 2026

End Date: 15 April 2026

Employees Assigned: 3

Subtasks:

Design wireframes for dashboard, inventory list, reports

Create UI layouts and navigation structure

Develop responsive screens using frontend framework

Implement forms for adding/updating inventory

Integrate frontend with backend APIs

Ensure mobile and browser compatibility

Outcome:
User-friendly and responsive frontend for managing inventory.

Phase 3: Backend Development

Start Date: 25 March 2026

End Date: 25 April 2026

Employees Assigned: 3

Subtasks:

Design backend architecture

Develop APIs for inventory, users, and suppliers

Implement business logic (stock updates, alerts)

Add authentication and role-based access

Handle validations, logging, and error handling

Outcome:
Secure and scalable backend supporting all system operations.

Phase 4: Database Design & Implementation

Start Date: 25 March 2026

End Date: 10 April 2026

Employees Assigned: 2

Subtasks:

Design database schema (products, suppliers, transactions)

Create tables and relationships

Add indexing for performance

Implement data validation and backups

Outcome:
Reliable and optimized database for inventory data.

Phase 5: Integration & Testing

Start Date: 26 April 2026

End Date: 20 May 2026

Employees Assigned: 2

Subtasks:

Integrate frontend, backend, and database

Perform functional and integration testing

Fix bugs and performance issues

Conduct user acceptance testing (UAT)

Outcome:
Stable and fully tested Smart Inventory Management System.

Phase 6: Deployment & Maintenance

Start Date: 21 May 2026

End Date: 30 June 2026

Employees Assigned: 1–2

Subtasks:

Deploy system to production environment

Configure servers and environment settings

Monitor system performance

Fix post-deployment issues

Provide basic maintenance and support

Outcome:
Smart Inventory Management System live and operational."#;

/// The glyph-avoidance rule, generated from [`BULLET_GLYPHS`].
fn glyph_rule() -> String {
    let glyphs = BULLET_GLYPHS
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("- never start a line with any of these characters: {}", glyphs)
}

/// Build the complete prompt for a roadmap request.
///
/// Pure and total: concatenates the fixed instruction block, the generated
/// glyph rule, the worked example, and a one-line-per-field dump of the
/// request. Input validity is the caller's concern.
pub fn build_prompt(request: &RoadmapRequest) -> String {
    let mut prompt = String::new();

    prompt.push_str(OUTPUT_RULES);
    prompt.push_str(&glyph_rule());
    prompt.push_str("\n\nexample (required format, copy exactly):\n");
    prompt.push_str(EXAMPLE_ROADMAP);
    prompt.push_str("\n\nInput data:\n");

    let _ = writeln!(prompt, "- project_name: {}", request.project_name);
    let _ = writeln!(prompt, "- start_date: {}", request.start_date);
    let _ = writeln!(prompt, "- end_date: {}", request.end_date);
    let _ = writeln!(prompt, "- capacity: {}", request.capacity);
    let _ = writeln!(prompt, "- resources: {}", request.resources);
    for task in &request.tasks {
        let _ = writeln!(
            prompt,
            "- task: {} (dependency: {}, risks: {}, milestones: {})",
            task.name, task.dependency, task.risks, task.milestones
        );
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Capacity, TaskInput};

    fn sample_request() -> RoadmapRequest {
        RoadmapRequest {
            project_name: "Orbital Launch Tracker".to_string(),
            start_date: "2026-09-01".to_string(),
            end_date: "2026-12-15".to_string(),
            capacity: Capacity::Number(8.0),
            resources: "Priya, Marcus, Lena".to_string(),
            tasks: vec![
                TaskInput {
                    name: "Telemetry ingestion".to_string(),
                    dependency: "none".to_string(),
                    risks: "upstream feed outages".to_string(),
                    milestones: "live feed parsing".to_string(),
                },
                TaskInput::new("Launch dashboard"),
            ],
        }
    }

    #[test]
    fn test_prompt_contains_every_field_verbatim() {
        let request = sample_request();
        let prompt = build_prompt(&request);

        assert!(prompt.contains("- project_name: Orbital Launch Tracker"));
        assert!(prompt.contains("- start_date: 2026-09-01"));
        assert!(prompt.contains("- end_date: 2026-12-15"));
        assert!(prompt.contains("- capacity: 8"));
        assert!(prompt.contains("- resources: Priya, Marcus, Lena"));
        assert!(prompt.contains("Telemetry ingestion"));
        assert!(prompt.contains("upstream feed outages"));
        assert!(prompt.contains("live feed parsing"));
        assert!(prompt.contains("Launch dashboard"));
    }

    #[test]
    fn test_prompt_lists_one_task_per_line() {
        let prompt = build_prompt(&sample_request());
        let task_lines: Vec<&str> = prompt
            .lines()
            .filter(|l| l.starts_with("- task: "))
            .collect();

        assert_eq!(task_lines.len(), 2);
        assert!(task_lines[0].contains("dependency: none"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = sample_request();
        assert_eq!(build_prompt(&request), build_prompt(&request));
    }

    #[test]
    fn test_prompt_includes_example_and_rules() {
        let prompt = build_prompt(&sample_request());
        assert!(prompt.contains("Smart Inventory Management System — Project Roadmap"));
        assert!(prompt.contains("do not use tables"));
        assert!(prompt.contains("Input data:"));
    }

    #[test]
    fn test_glyph_rule_enumerates_every_bullet_glyph() {
        let prompt = build_prompt(&sample_request());
        let rule_line = prompt
            .lines()
            .find(|l| l.contains("never start a line"))
            .expect("glyph rule line present");

        for glyph in BULLET_GLYPHS {
            assert!(
                rule_line.contains(glyph),
                "glyph {:?} missing from instruction text",
                glyph
            );
        }
    }
}
