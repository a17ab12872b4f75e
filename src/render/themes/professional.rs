//! Professional theme
//!
//! Corporate card layout: dark banner header, two-column body with the
//! sidebar carrying skills and social links.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{heading_if, paragraph_if, span_if};

const SECTION_HEAD: &str =
    "text-lg font-bold uppercase tracking-wider text-slate-500 mb-4 border-b pb-2";

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-slate-50 text-slate-800 min-h-full p-8 font-sans").child(
        Node::block("max-w-4xl mx-auto bg-white shadow-xl rounded-none overflow-hidden")
            .child(banner(p))
            .child(
                Node::block("p-8 grid grid-cols-3 gap-8")
                    .child(main_column(p))
                    .child(sidebar(p)),
            ),
    )
}

fn banner(p: &Profile) -> Node {
    let identity = Node::block("")
        .maybe(heading_if(1, "text-4xl font-bold mb-2", &p.full_name))
        .maybe(paragraph_if("text-xl text-slate-300", &p.title));

    let contact = Node::block("text-right text-sm text-slate-300 space-y-1")
        .maybe(span_if("flex items-center justify-end gap-2", &p.email))
        .maybe(span_if("flex items-center justify-end gap-2", &p.phone))
        .maybe(span_if("flex items-center justify-end gap-2", &p.location));

    Node::block("bg-slate-800 text-white p-8").child(
        Node::block("flex justify-between items-start")
            .child(identity)
            .child(contact),
    )
}

fn main_column(p: &Profile) -> Node {
    let experience = p.experience.iter().map(|exp| {
        Node::block("")
            .key(NodeKey::Entry(exp.id.0))
            .child(
                Node::block("flex justify-between items-baseline mb-1")
                    .maybe(span_if("text-lg font-bold text-slate-800", &exp.role))
                    .maybe(span_if("text-sm text-slate-500 font-medium", &exp.duration)),
            )
            .maybe(paragraph_if("text-slate-600 font-medium mb-2", &exp.company))
            .maybe(paragraph_if("text-slate-600 text-sm", &exp.description))
    });

    let projects = p.projects.iter().map(|proj| {
        let tags = proj.tags.iter().enumerate().map(|(i, tag)| {
            Node::span(
                "text-xs font-medium text-slate-500 bg-white px-2 py-0.5 rounded border border-slate-200",
                tag,
            )
            .key(NodeKey::Index(i))
        });
        Node::block("bg-slate-50 p-4 rounded border border-slate-100")
            .key(NodeKey::Entry(proj.id.0))
            .maybe(heading_if(4, "font-bold text-slate-800", &proj.name))
            .maybe(paragraph_if("text-sm text-slate-600 mt-1 mb-2", &proj.description))
            .child(Node::block("flex gap-2").extend(tags))
    });

    Node::block("col-span-2 space-y-8")
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "Profile"))
                .maybe(paragraph_if("text-slate-600 leading-relaxed", &p.bio)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "Experience"))
                .child(Node::block("space-y-6").extend(experience)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "Projects"))
                .child(Node::block("grid grid-cols-1 gap-4").extend(projects)),
        )
}

fn sidebar(p: &Profile) -> Node {
    let skills = p.skills.iter().enumerate().map(|(i, skill)| {
        Node::span(
            "px-3 py-1 bg-slate-100 text-slate-700 rounded text-sm font-medium",
            skill,
        )
        .key(NodeKey::Index(i))
    });

    Node::block("space-y-8")
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "Skills"))
                .child(Node::block("flex flex-wrap gap-2").extend(skills)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "Connect"))
                .child(
                    Node::block("space-y-2 text-sm text-slate-600")
                        .maybe(span_if("flex items-center gap-2", &p.linkedin))
                        .maybe(span_if("flex items-center gap-2", &p.github)),
                ),
        )
}
