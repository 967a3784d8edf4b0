use super::types::NodeKind;

/// Colors and blurb for one node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeStyle {
	pub accent: &'static str,
	pub text: &'static str,
	pub background: &'static str,
	pub border: &'static str,
	pub description: &'static str,
}

const fn style(
	accent: &'static str,
	text: &'static str,
	background: &'static str,
	border: &'static str,
	description: &'static str,
) -> NodeStyle {
	NodeStyle {
		accent,
		text,
		background,
		border,
		description,
	}
}

pub const DEFAULT_STYLE: NodeStyle = style(
	"#6366f1",
	"#4338ca",
	"#eef2ff",
	"#c7d2fe",
	"General learning element",
);

pub fn node_style(kind: NodeKind) -> NodeStyle {
	match kind {
		NodeKind::Start => style(
			"#10b981",
			"#047857",
			"#ecfdf5",
			"#a7f3d0",
			"Starting point of your learning journey",
		),
		NodeKind::Course => style(
			"#3b82f6",
			"#1d4ed8",
			"#eff6ff",
			"#bfdbfe",
			"Structured learning content or course",
		),
		NodeKind::Milestone => style(
			"#a855f7",
			"#7e22ce",
			"#faf5ff",
			"#e9d5ff",
			"Important achievement or checkpoint",
		),
		NodeKind::Project => style(
			"#f59e0b",
			"#b45309",
			"#fffbeb",
			"#fde68a",
			"Hands-on project or practical application",
		),
		NodeKind::Concept => style(
			"#8b5cf6",
			"#6d28d9",
			"#f5f3ff",
			"#ddd6fe",
			"Core concept or theoretical knowledge",
		),
		NodeKind::Topic => style(
			"#06b6d4",
			"#0e7490",
			"#ecfeff",
			"#a5f3fc",
			"Specific topic or subject area",
		),
		NodeKind::Step => style(
			"#14b8a6",
			"#0f766e",
			"#f0fdfa",
			"#99f6e4",
			"Individual step in the learning process",
		),
		NodeKind::Quiz => style(
			"#ec4899",
			"#be185d",
			"#fdf2f8",
			"#fbcfe8",
			"Quick quiz to test your knowledge",
		),
		NodeKind::End => style(
			"#f43f5e",
			"#be123c",
			"#fff1f2",
			"#fecdd3",
			"Completion or end goal",
		),
		NodeKind::Other => DEFAULT_STYLE,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_kind_falls_back() {
		assert_eq!(node_style(NodeKind::Other), DEFAULT_STYLE);
		assert_ne!(node_style(NodeKind::Start), DEFAULT_STYLE);
	}
}
