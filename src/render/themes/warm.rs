//! Warm theme
//!
//! Rounded card in yellow and orange tones, centered banner, accent-bar
//! section headings.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{heading_if, join_present, paragraph_if};

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-[#fff8e1] text-[#5d4037] min-h-full p-8 font-sans").child(
        Node::block("max-w-4xl mx-auto bg-white rounded-3xl shadow-xl overflow-hidden")
            .child(banner(p))
            .child(
                Node::block("p-12 space-y-10")
                    .child(
                        Node::section("text-center max-w-2xl mx-auto")
                            .maybe(paragraph_if("text-lg italic text-[#6d4c41]", &p.bio)),
                    )
                    .child(
                        Node::block("grid grid-cols-1 md:grid-cols-2 gap-12")
                            .child(experience_column(p))
                            .child(side_column(p)),
                    ),
            ),
    )
}

fn banner(p: &Profile) -> Node {
    Node::block("bg-[#ffecb3] p-12 text-center")
        .maybe(heading_if(1, "text-4xl font-bold text-[#4e342e] mb-2", &p.full_name))
        .maybe(paragraph_if("text-[#795548] font-medium", &p.title))
}

/// Heading with the theme's rounded accent bar before the label.
fn accent_heading(label: &str) -> Node {
    Node::heading(3, "text-xl font-bold text-[#ff6f00] mb-6 flex items-center", "")
        .child(Node::span("w-8 h-1 bg-[#ff6f00] mr-3 rounded-full", ""))
        .child(Node::span("", label))
}

fn experience_column(p: &Profile) -> Node {
    let entries = p.experience.iter().map(|exp| {
        Node::block("bg-[#fff3e0] p-4 rounded-xl")
            .key(NodeKey::Entry(exp.id.0))
            .maybe(heading_if(4, "font-bold text-[#4e342e]", &exp.role))
            .maybe(paragraph_if(
                "text-sm text-[#8d6e63] mb-2",
                &join_present(&[&exp.company, &exp.duration], " | "),
            ))
            .maybe(paragraph_if("text-sm", &exp.description))
    });

    Node::section("")
        .child(accent_heading("Experience"))
        .child(Node::block("space-y-6").extend(entries))
}

fn side_column(p: &Profile) -> Node {
    let skills = p.skills.iter().enumerate().map(|(i, skill)| {
        Node::span("px-3 py-1 bg-[#ffcc80] text-[#4e342e] rounded-lg text-sm font-medium", skill)
            .key(NodeKey::Index(i))
    });

    let projects = p.projects.iter().map(|proj| {
        Node::block("")
            .key(NodeKey::Entry(proj.id.0))
            .maybe(heading_if(4, "font-bold text-[#4e342e]", &proj.name))
            .maybe(paragraph_if("text-sm text-[#6d4c41]", &proj.description))
    });

    Node::block("space-y-10")
        .child(
            Node::section("")
                .child(accent_heading("Skills"))
                .child(Node::block("flex flex-wrap gap-2").extend(skills)),
        )
        .child(
            Node::section("")
                .child(accent_heading("Projects"))
                .child(Node::block("space-y-4").extend(projects)),
        )
}
