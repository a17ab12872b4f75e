//! Cold theme
//!
//! Crisp cyan palette with a tinted sidebar and a heavy top rule.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{heading_if, paragraph_if, span_if};

const MAIN_HEAD: &str = "text-2xl font-light text-[#00838f] mb-4 border-b border-[#b2ebf2] pb-2";
const MAIN_HEAD_WIDE: &str = "text-2xl font-light text-[#00838f] mb-6 border-b border-[#b2ebf2] pb-2";
const SIDE_HEAD: &str = "text-sm font-bold uppercase tracking-wider text-[#00bcd4] mb-3";

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-[#e0f7fa] text-[#006064] min-h-full p-8 font-sans").child(
        Node::block("max-w-5xl mx-auto bg-white shadow-2xl border-t-8 border-[#00bcd4]").child(
            Node::block("grid grid-cols-1 md:grid-cols-12")
                .child(sidebar(p))
                .child(main_column(p)),
        ),
    )
}

fn sidebar(p: &Profile) -> Node {
    let skills = p.skills.iter().enumerate().map(|(i, skill)| {
        Node::span(
            "px-2 py-1 bg-[#e0f7fa] text-[#006064] text-xs rounded border border-[#b2ebf2]",
            skill,
        )
        .key(NodeKey::Index(i))
    });

    Node::block("md:col-span-4 bg-[#f0ffff] p-8 border-r border-[#b2ebf2]")
        .maybe(heading_if(1, "text-3xl font-bold text-[#00838f] mb-2", &p.full_name))
        .maybe(paragraph_if("text-[#0097a7] mb-8 font-medium", &p.title))
        .child(
            Node::block("space-y-8")
                .child(
                    Node::section("")
                        .child(Node::heading(3, SIDE_HEAD, "Contact"))
                        .child(
                            Node::block("space-y-2 text-sm")
                                .maybe(paragraph_if("", &p.email))
                                .maybe(paragraph_if("", &p.phone))
                                .maybe(paragraph_if("", &p.location)),
                        ),
                )
                .child(
                    Node::section("")
                        .child(Node::heading(3, SIDE_HEAD, "Skills"))
                        .child(Node::block("flex flex-wrap gap-2").extend(skills)),
                ),
        )
}

fn main_column(p: &Profile) -> Node {
    let experience = p.experience.iter().map(|exp| {
        Node::block("")
            .key(NodeKey::Entry(exp.id.0))
            .child(
                Node::block("flex justify-between items-center mb-1")
                    .maybe(heading_if(4, "text-lg font-bold text-[#006064]", &exp.role))
                    .maybe(span_if(
                        "text-xs bg-[#e0f7fa] px-2 py-1 rounded text-[#00838f]",
                        &exp.duration,
                    )),
            )
            .maybe(paragraph_if("text-sm text-[#0097a7] mb-2 font-medium", &exp.company))
            .maybe(paragraph_if("text-[#455a64] text-sm", &exp.description))
    });

    let projects = p.projects.iter().map(|proj| {
        Node::block("bg-[#e0f7fa] p-4 rounded")
            .key(NodeKey::Entry(proj.id.0))
            .maybe(heading_if(4, "font-bold text-[#00838f] mb-1", &proj.name))
            .maybe(paragraph_if("text-xs text-[#455a64]", &proj.description))
    });

    Node::block("md:col-span-8 p-8")
        .child(
            Node::section("mb-10")
                .child(Node::heading(3, MAIN_HEAD, "Profile"))
                .maybe(paragraph_if("text-[#455a64] leading-relaxed", &p.bio)),
        )
        .child(
            Node::section("mb-10")
                .child(Node::heading(3, MAIN_HEAD_WIDE, "Experience"))
                .child(Node::block("space-y-6").extend(experience)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, MAIN_HEAD_WIDE, "Projects"))
                .child(Node::block("grid grid-cols-1 md:grid-cols-2 gap-4").extend(projects)),
        )
}
