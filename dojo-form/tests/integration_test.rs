//! Integration tests for dojo-form

use dojo_form::*;
use dojo_view::{Container, Doctype, PageView};

fn signup_form() -> Form {
    let mut form = Form::manager("signup");
    form.add(
        FieldSet::with_options(
            "account",
            FieldSetOptions {
                create_dojo_attach_point: true,
            },
        )
        .with_element(Element::validation_text_box("email").with_label("Email"))
        .with_element(Element::currency_text_box("deposit").with_label("Deposit")),
        10,
    )
    .add(Element::editor("bio").with_value("Hello"), 5)
    .add_submit(DEFAULT_SUBMIT_PRIORITY, DEFAULT_SUBMIT_TEXT);
    form
}

#[test]
fn test_form_layout() {
    let form = signup_form();
    let names: Vec<&str> = form.items().map(FormItem::name).collect();

    assert_eq!(names, ["account", "bio", "submit"]);
    assert_eq!(
        form.attribute("data-dojo-type"),
        Some(&AttributeValue::from("dojox/form/Manager"))
    );

    let Some(FormItem::FieldSet(account)) = form.get("account") else {
        panic!("account fieldset missing");
    };
    assert_eq!(
        account.attributes().get("data-dojo-attach-point"),
        Some(&AttributeValue::from("account"))
    );
}

#[test]
fn test_messages_after_validation() {
    let mut form = signup_form();
    if let Some(FormItem::FieldSet(account)) = form.get_mut("account") {
        if let Some(email) = account.element_mut("email") {
            email.set_messages(vec!["Value is required".to_string()]);
        }
    }

    let messages = form.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].input, "input[name=\"account[email]\"]");
    assert_eq!(messages[0].message, "Value is required");

    let account = form.element_messages("account").unwrap();
    assert_eq!(account["email"], ["Value is required"]);
    assert!(form.element_messages("nope").is_err());
}

#[test]
fn test_render_rows_for_xhtml_view() {
    let view = PageView::new().with_doctype(Doctype::Xhtml1Transitional);
    let row = DijitFormRow::for_view(&view);
    let form = signup_form();

    let Some(FormItem::FieldSet(account)) = form.get("account") else {
        panic!("account fieldset missing");
    };
    let deposit = account.element("deposit").unwrap();
    let html = row.render(deposit).unwrap();

    assert!(html.starts_with("<label><span>Deposit</span><input type=\"text\""));
    assert!(html.contains("data-dojo-type=\"dijit/form/CurrencyTextBox\""));
    assert!(html.ends_with(" /></label>"));

    let Some(FormItem::Element(bio)) = form.get("bio") else {
        panic!("bio missing");
    };
    let html = row.render(bio).unwrap();
    assert!(html.starts_with("<div type=\"editor\" data-dojo-type=\"dijit/Editor\""));
    assert!(html.ends_with(" name=\"bio\">Hello</div>"));
}

#[test]
fn test_form_widgets_need_their_modules() {
    let form = signup_form();
    let mut container = Container::new();
    container.enable();

    for item in form.items() {
        if let FormItem::Element(element) = item {
            if let Some(AttributeValue::Text(dojo_type)) = element.attribute("data-dojo-type") {
                // Legacy dotted module names
                container.require_module(&dojo_type.replace('/', ".")).unwrap();
            }
        }
    }

    assert!(container.modules().iter().any(|m| m == "dijit.Editor"));
    let html = container.render(&PageView::new());
    assert!(html.contains("dojo.require(\"dijit.Editor\");"));
}

#[test]
fn test_uploader_filter() {
    let mut files = indexmap::IndexMap::new();
    files.insert("gallery".to_string(), vec!["one.jpg".to_string()]);

    assert_eq!(
        UploaderFilter::new().filter(files),
        Some(vec!["one.jpg".to_string()])
    );
}
