//! Outline theme
//!
//! Brutalist wireframe: hard black borders, offset box shadows, uppercase
//! everything.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{heading_if, paragraph_if};

const SECTION_HEAD: &str = "text-2xl font-bold uppercase mb-4 decoration-4 underline decoration-black";

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-white text-black min-h-full p-8 font-mono").child(
        Node::block("max-w-4xl mx-auto border-4 border-black p-8 shadow-[8px_8px_0px_0px_rgba(0,0,0,1)]")
            .child(header(p))
            .child(
                Node::block("grid grid-cols-1 md:grid-cols-2 gap-12")
                    .child(left_column(p))
                    .child(right_column(p)),
            ),
    )
}

fn header(p: &Profile) -> Node {
    let mut header = Node::block("text-center mb-12 border-b-4 border-black pb-8").maybe(
        heading_if(1, "text-5xl font-bold mb-4 uppercase", &p.full_name),
    );
    if !p.title.is_empty() {
        header = header.child(
            Node::block(
                "inline-block border-2 border-black px-4 py-1 font-bold text-xl uppercase bg-black text-white",
            )
            .child(Node::span("", &p.title)),
        );
    }
    header
}

fn left_column(p: &Profile) -> Node {
    let skills = p.skills.iter().enumerate().map(|(i, skill)| {
        Node::span(
            "border-2 border-black px-3 py-1 font-bold text-sm hover:bg-black hover:text-white transition-colors",
            skill,
        )
        .key(NodeKey::Index(i))
    });

    Node::block("space-y-12")
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "About"))
                .maybe(paragraph_if("text-lg leading-relaxed", &p.bio)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "Skills"))
                .child(Node::block("flex flex-wrap gap-3").extend(skills)),
        )
}

fn right_column(p: &Profile) -> Node {
    let experience = p.experience.iter().map(|exp| {
        let mut company_line = Node::paragraph("font-bold mb-2", "");
        if !exp.company.is_empty() {
            company_line = company_line.child(Node::span("", &exp.company));
        }
        if !exp.duration.is_empty() {
            company_line = company_line.child(Node::span(
                "font-normal text-sm",
                format!(" ({})", exp.duration),
            ));
        }

        Node::block("border-2 border-black p-4 hover:shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] transition-shadow")
            .key(NodeKey::Entry(exp.id.0))
            .maybe(heading_if(4, "text-xl font-bold uppercase", &exp.role))
            .child(company_line)
            .maybe(paragraph_if("text-sm", &exp.description))
    });

    let projects = p.projects.iter().map(|proj| {
        let tags = proj.tags.iter().enumerate().map(|(i, tag)| {
            Node::span("border-2 border-black px-2 py-0.5 font-bold text-xs", tag)
                .key(NodeKey::Index(i))
        });
        Node::block("border-2 border-black p-4 hover:shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] transition-shadow")
            .key(NodeKey::Entry(proj.id.0))
            .maybe(heading_if(4, "text-xl font-bold uppercase", &proj.name))
            .maybe(paragraph_if("text-sm mb-2", &proj.description))
            .child(Node::block("flex flex-wrap gap-2").extend(tags))
    });

    Node::block("space-y-12")
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "Experience"))
                .child(Node::block("space-y-8").extend(experience)),
        )
        .child(
            Node::section("")
                .child(Node::heading(3, SECTION_HEAD, "Projects"))
                .child(Node::block("space-y-8").extend(projects)),
        )
}
