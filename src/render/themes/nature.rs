//! Nature theme
//!
//! Earth tones, rounded cards, centered header with a ringed avatar.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{heading_if, initial, join_present, paragraph_if, span_if};

const MAIN_HEAD: &str = "text-2xl font-serif text-[#2c3e2c] mb-6 border-b border-[#e6ebe6] pb-2";

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-[#fdfbf7] text-[#4a4a4a] min-h-full p-8 font-sans").child(
        Node::block("max-w-4xl mx-auto").child(header(p)).child(
            Node::block("grid grid-cols-1 md:grid-cols-3 gap-12")
                .child(sidebar(p))
                .child(main_column(p)),
        ),
    )
}

fn header(p: &Profile) -> Node {
    let avatar = Node::block("inline-block p-2 border-2 border-[#8c9e8c] rounded-full mb-4").child(
        Node::block(
            "w-24 h-24 bg-[#e6ebe6] rounded-full flex items-center justify-center text-3xl font-serif text-[#5c7a5c]",
        )
        .maybe(span_if("", &initial(&p.full_name))),
    );

    Node::block("text-center mb-12")
        .child(avatar)
        .maybe(heading_if(1, "text-4xl font-serif text-[#2c3e2c] mb-2", &p.full_name))
        .maybe(paragraph_if("text-[#8c9e8c] tracking-wide", &p.title))
}

fn sidebar(p: &Profile) -> Node {
    let skills = p.skills.iter().enumerate().map(|(i, skill)| {
        Node::span("px-3 py-1 bg-white rounded-full text-xs text-[#5c5c5c] shadow-sm", skill)
            .key(NodeKey::Index(i))
    });

    Node::block("md:col-span-1 space-y-8")
        .child(
            Node::block("bg-[#e6ebe6] p-6 rounded-2xl")
                .child(Node::heading(3, "text-[#5c7a5c] font-bold mb-4 font-serif", "Contact"))
                .child(
                    Node::block("space-y-2 text-sm")
                        .maybe(paragraph_if("", &p.email))
                        .maybe(paragraph_if("", &p.phone))
                        .maybe(paragraph_if("", &p.location)),
                ),
        )
        .child(
            Node::block("bg-[#f4f1ea] p-6 rounded-2xl")
                .child(Node::heading(3, "text-[#8c7e6c] font-bold mb-4 font-serif", "Skills"))
                .child(Node::block("flex flex-wrap gap-2").extend(skills)),
        )
}

fn main_column(p: &Profile) -> Node {
    let experience = p.experience.iter().map(|exp| {
        Node::block("relative pl-6 border-l-2 border-[#e6ebe6]")
            .key(NodeKey::Entry(exp.id.0))
            .child(Node::block("absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-[#8c9e8c]"))
            .maybe(heading_if(4, "text-xl font-bold text-[#4a4a4a]", &exp.role))
            .maybe(paragraph_if(
                "text-[#8c9e8c] text-sm mb-2",
                &join_present(&[&exp.company, &exp.duration], " \u{2022} "),
            ))
            .maybe(paragraph_if("text-sm leading-relaxed", &exp.description))
    });

    let projects = p.projects.iter().map(|proj| {
        let tags = proj.tags.iter().enumerate().map(|(i, tag)| {
            Node::span("px-3 py-1 bg-white rounded-full text-xs text-[#5c5c5c] shadow-sm", tag)
                .key(NodeKey::Index(i))
        });
        Node::block("")
            .key(NodeKey::Entry(proj.id.0))
            .maybe(heading_if(4, "text-xl font-bold text-[#4a4a4a]", &proj.name))
            .maybe(paragraph_if("text-sm leading-relaxed mb-2", &proj.description))
            .child(Node::block("flex flex-wrap gap-2").extend(tags))
    });

    Node::block("md:col-span-2 space-y-10")
        .child(
            Node::section("")
                .child(Node::heading(3, MAIN_HEAD, "About Me"))
                .maybe(paragraph_if("leading-relaxed", &p.bio)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, MAIN_HEAD, "Experience"))
                .child(Node::block("space-y-8").extend(experience)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, MAIN_HEAD, "Projects"))
                .child(Node::block("space-y-8").extend(projects)),
        )
}
