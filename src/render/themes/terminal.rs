//! Terminal theme
//!
//! The profile presented as a shell session dumping a JSON record, with
//! prompt lines above and below.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;

const KEY: &str = "text-[#e0af68]";
const VALUE: &str = "text-[#9ece6a]";

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-[#1a1b26] text-[#a9b1d6] min-h-full p-8 font-mono text-sm leading-relaxed")
        .child(
            Node::block("max-w-4xl mx-auto")
                .child(prompt("cat profile.json"))
                .child(record(p))
                .child(cursor_prompt()),
        )
}

fn prompt(command: &str) -> Node {
    Node::block("mb-8")
        .child(Node::span("text-[#7aa2f7]", "user@portfolio"))
        .child(Node::span("text-[#9ece6a]", " ~ "))
        .child(Node::span("text-[#bb9af7]", "$"))
        .child(Node::span("", format!(" {command}")))
}

fn cursor_prompt() -> Node {
    Node::block("mt-8 animate-pulse")
        .child(Node::span("text-[#7aa2f7]", "user@portfolio"))
        .child(Node::span("text-[#9ece6a]", " ~ "))
        .child(Node::span("text-[#bb9af7]", "$ "))
        .child(Node::span("w-2 h-4 bg-[#a9b1d6] inline-block align-middle", ""))
}

/// A `"key": "value",` line of the pseudo record.
fn field_line(indent: &str, key: &str, value: &str, trailing_comma: bool) -> Node {
    let comma = if trailing_comma { "," } else { "" };
    Node::paragraph(indent, "")
        .child(Node::span(KEY, format!("\"{key}\"")))
        .child(Node::span("", ": "))
        .child(Node::span(VALUE, format!("\"{value}\"")))
        .child(Node::span("", comma))
}

fn record(p: &Profile) -> Node {
    let mut body = Node::block("pl-4 border-l-2 border-[#2f334d] space-y-1");

    if !p.full_name.is_empty() {
        body = body.child(field_line("", "name", &p.full_name, true));
    }
    if !p.title.is_empty() {
        body = body.child(field_line("", "title", &p.title, true));
    }

    if !p.email.is_empty() || !p.phone.is_empty() {
        body = body.child(Node::paragraph("", "").child(Node::span(KEY, "\"contact\"")).child(
            Node::span("", ": {"),
        ));
        if !p.email.is_empty() {
            body = body.child(field_line("pl-4", "email", &p.email, !p.phone.is_empty()));
        }
        if !p.phone.is_empty() {
            body = body.child(field_line("pl-4", "phone", &p.phone, false));
        }
        body = body.child(Node::paragraph("", "},"));
    }

    if !p.bio.is_empty() {
        body = body.child(field_line("", "bio", &p.bio, true));
    }

    body = body
        .child(Node::paragraph("", "").child(Node::span(KEY, "\"skills\"")).child(Node::span("", ": [")))
        .child(Node::paragraph(
            format!("pl-4 {VALUE}").as_str(),
            p.skills
                .iter()
                .map(|s| format!("\"{s}\""))
                .collect::<Vec<_>>()
                .join(", "),
        ))
        .child(Node::paragraph("", "],"));

    body = body.child(
        Node::paragraph("", "")
            .child(Node::span(KEY, "\"experience\""))
            .child(Node::span("", ": [")),
    );
    for exp in &p.experience {
        let mut entry = Node::block("pl-4")
            .key(NodeKey::Entry(exp.id.0))
            .child(Node::paragraph("", "{"));
        if !exp.role.is_empty() {
            entry = entry.child(field_line("pl-4", "role", &exp.role, true));
        }
        if !exp.company.is_empty() {
            entry = entry.child(field_line("pl-4", "company", &exp.company, true));
        }
        if !exp.description.is_empty() {
            entry = entry.child(field_line("pl-4", "desc", &exp.description, false));
        }
        body = body.child(entry.child(Node::paragraph("", "},")));
    }
    body = body.child(Node::paragraph("", "],"));

    body = body.child(
        Node::paragraph("", "")
            .child(Node::span(KEY, "\"projects\""))
            .child(Node::span("", ": [")),
    );
    for proj in &p.projects {
        let mut entry = Node::block("pl-4")
            .key(NodeKey::Entry(proj.id.0))
            .child(Node::paragraph("", "{"));
        if !proj.name.is_empty() {
            entry = entry.child(field_line("pl-4", "name", &proj.name, true));
        }
        if !proj.description.is_empty() {
            entry = entry.child(field_line("pl-4", "desc", &proj.description, true));
        }
        entry = entry.child(
            Node::paragraph("pl-4", "")
                .child(Node::span(KEY, "\"tags\""))
                .child(Node::span("", ": ["))
                .child(Node::span(
                    VALUE,
                    proj.tags
                        .iter()
                        .map(|t| format!("\"{t}\""))
                        .collect::<Vec<_>>()
                        .join(", "),
                ))
                .child(Node::span("", "]")),
        );
        body = body.child(entry.child(Node::paragraph("", "},")));
    }
    body.child(Node::paragraph("", "]"))
}
