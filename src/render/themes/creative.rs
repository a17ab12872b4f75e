//! Creative theme
//!
//! Dark single-page layout with a gradient display name and a timeline
//! treatment for experience.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{heading_if, join_present, paragraph_if, span_if};

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-gray-900 text-white min-h-full p-8 font-sans")
        .child(header(p))
        .child(
            Node::block("grid grid-cols-1 md:grid-cols-3 gap-12")
                .child(main_column(p))
                .child(sidebar(p)),
        )
}

fn header(p: &Profile) -> Node {
    Node::block("mb-12 border-b border-gray-800 pb-8")
        .maybe(heading_if(
            1,
            "text-5xl font-bold mb-4 bg-gradient-to-r from-purple-400 to-pink-500 text-transparent bg-clip-text",
            &p.full_name,
        ))
        .maybe(paragraph_if("text-xl text-gray-400 mb-6", &p.title))
        .child(
            Node::block("flex flex-wrap gap-4 text-sm text-gray-400")
                .maybe(span_if("flex items-center", &p.email))
                .maybe(span_if("flex items-center", &p.location))
                .maybe(span_if("flex items-center", &p.linkedin)),
        )
}

fn main_column(p: &Profile) -> Node {
    let experience = p.experience.iter().map(|exp| {
        Node::block("relative pl-6 border-l-2 border-gray-800")
            .key(NodeKey::Entry(exp.id.0))
            .child(Node::block("absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-purple-500"))
            .maybe(heading_if(4, "text-xl font-semibold", &exp.role))
            .maybe(paragraph_if(
                "text-purple-300 mb-2",
                &join_present(&[&exp.company, &exp.duration], " | "),
            ))
            .maybe(paragraph_if("text-gray-400 text-sm", &exp.description))
    });

    let projects = p.projects.iter().map(|proj| {
        let tags = proj.tags.iter().enumerate().map(|(i, tag)| {
            Node::span("px-2 py-1 bg-gray-700 text-xs rounded text-gray-300", format!("#{tag}"))
                .key(NodeKey::Index(i))
        });
        Node::block("bg-gray-800 p-6 rounded-xl hover:bg-gray-750 transition-colors")
            .key(NodeKey::Entry(proj.id.0))
            .maybe(heading_if(4, "text-lg font-bold mb-2", &proj.name))
            .maybe(paragraph_if("text-gray-400 text-sm mb-4", &proj.description))
            .child(Node::block("flex flex-wrap gap-2").extend(tags))
    });

    Node::block("md:col-span-2 space-y-12")
        .child(
            Node::section("")
                .child(Node::heading(3, "text-2xl font-bold mb-4 text-purple-400", "About Me"))
                .maybe(paragraph_if("text-gray-300 leading-relaxed", &p.bio)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, "text-2xl font-bold mb-6 text-purple-400", "Experience"))
                .child(Node::block("space-y-8").extend(experience)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, "text-2xl font-bold mb-6 text-purple-400", "Projects"))
                .child(Node::block("grid grid-cols-1 gap-6").extend(projects)),
        )
}

fn sidebar(p: &Profile) -> Node {
    let skills = p.skills.iter().enumerate().map(|(i, skill)| {
        Node::span(
            "px-3 py-1 bg-purple-900/30 border border-purple-500/30 text-purple-300 rounded-full text-sm",
            skill,
        )
        .key(NodeKey::Index(i))
    });

    Node::block("space-y-12").child(
        Node::section("")
            .child(Node::heading(3, "text-xl font-bold mb-4 text-purple-400", "Skills"))
            .child(Node::block("flex flex-wrap gap-2").extend(skills)),
    )
}
