//! Compact theme
//!
//! Dense single-sheet layout trading whitespace for information density.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{join_present, paragraph_if, span_if};

const SECTION_HEAD: &str = "font-bold border-b border-gray-200 mb-2";

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-gray-50 text-gray-900 min-h-full p-8 font-sans text-sm").child(
        Node::block("max-w-3xl mx-auto bg-white shadow-sm border border-gray-200 p-6")
            .child(header(p))
            .child(
                Node::block("grid grid-cols-3 gap-6")
                    .child(main_column(p))
                    .child(sidebar(p)),
            ),
    )
}

fn header(p: &Profile) -> Node {
    let identity = Node::block("")
        .maybe(if p.full_name.is_empty() {
            None
        } else {
            Some(Node::heading(1, "text-2xl font-bold", &p.full_name))
        })
        .maybe(paragraph_if("text-gray-600", &p.title));

    let contact = Node::block("text-right text-xs text-gray-500")
        .maybe(paragraph_if("", &join_present(&[&p.email, &p.phone], " | ")))
        .maybe(paragraph_if("", &p.location));

    Node::block("border-b border-gray-200 pb-4 mb-4 flex justify-between items-end")
        .child(identity)
        .child(contact)
}

fn main_column(p: &Profile) -> Node {
    let experience = p.experience.iter().map(|exp| {
        Node::block("")
            .key(NodeKey::Entry(exp.id.0))
            .child(
                Node::block("flex justify-between font-medium")
                    .maybe(span_if("", &join_present(&[&exp.role, &exp.company], ", ")))
                    .maybe(span_if("text-gray-500 text-xs", &exp.duration)),
            )
            .maybe(paragraph_if("text-xs text-gray-600 mt-1", &exp.description))
    });

    let projects = p.projects.iter().map(|proj| {
        Node::block("")
            .key(NodeKey::Entry(proj.id.0))
            .maybe(span_if("font-medium", &proj.name))
            .maybe(if proj.description.is_empty() {
                None
            } else {
                Some(Node::span(
                    "text-xs text-gray-600 ml-2",
                    format!("- {}", proj.description),
                ))
            })
    });

    Node::block("col-span-2 space-y-4")
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "Experience"))
                .child(Node::block("space-y-3").extend(experience)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "Projects"))
                .child(Node::block("space-y-2").extend(projects)),
        )
}

fn sidebar(p: &Profile) -> Node {
    let skills = p.skills.iter().enumerate().map(|(i, skill)| {
        Node::span("bg-gray-100 px-1.5 py-0.5 rounded text-xs border border-gray-200", skill)
            .key(NodeKey::Index(i))
    });

    Node::block("space-y-4")
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "Summary"))
                .maybe(paragraph_if("text-xs text-gray-600", &p.bio)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "Skills"))
                .child(Node::block("flex flex-wrap gap-1").extend(skills)),
        )
}
