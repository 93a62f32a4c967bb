use lattice_ui::{
    button, checkbox, heading, list, list_item, metric, panel, render, text, text_field,
    HeadingLevel, Node, ServerAction,
};
use proptest::prelude::*;

fn assert_no_raw_markup(html: &str, hostile: &str) -> Result<(), TestCaseError> {
    // Raw user input must never survive into markup positions. The escaped
    // forms are fine; the unescaped originals are not.
    prop_assert!(
        !html.contains(hostile),
        "unescaped input leaked into output:\n{html}"
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn text_content_is_always_escaped(content in "[a-z ]{0,20}") {
        let hostile = format!("<script>{content}</script>");
        let html = render(&text(&hostile).into());
        assert_no_raw_markup(&html, &hostile)?;
        prop_assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn attribute_values_cannot_break_out(value in "[a-zA-Z0-9 ]{0,16}") {
        let hostile = format!("{value}\" data-evil=\"1");
        let html = render(&text_field("title").value(&hostile).into());
        assert_no_raw_markup(&html, &hostile)?;
        prop_assert!(!html.contains("data-evil=\""));
    }

    #[test]
    fn rendering_is_deterministic(
        title in "[a-zA-Z0-9 <>&\"]{0,24}",
        labels in prop::collection::vec("[a-zA-Z0-9 ]{1,12}", 0..8),
        done in prop::collection::vec(any::<bool>(), 0..8),
    ) {
        let items = labels.iter().zip(done.iter().chain(std::iter::repeat(&false)));
        let tree: Node = panel()
            .header(heading(HeadingLevel::H2, &title))
            .child(list().items(items.map(|(label, &checked)| {
                list_item([checkbox("done", label).checked(checked).into()])
            })))
            .footer(metric("Total", labels.len().to_string()))
            .into();
        prop_assert_eq!(render(&tree), render(&tree));
    }

    #[test]
    fn stamping_never_disturbs_subtree_output(
        view_name in "[A-Za-z]{1,16}",
        domain in "[a-z]{1,12}",
    ) {
        let tree: Node = panel().child(button("Go").action(ServerAction::post("/go"))).into();
        let plain = render(&tree);
        let stamped = render(
            &tree
                .clone()
                .with_id("v1")
                .with_attr("data-view", &view_name)
                .with_attr("data-domain", &domain),
        );
        // Everything after the root open tag is identical.
        let plain_rest = plain.split_once('>').map(|(_, rest)| rest);
        let stamped_rest = stamped.split_once('>').map(|(_, rest)| rest);
        prop_assert_eq!(plain_rest, stamped_rest);
    }
}
