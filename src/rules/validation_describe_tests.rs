use super::*;
use crate::rules::test_fixtures::run;

fn findings(source: &str) -> Vec<Finding> {
    run(&ValidationDescribePerAttribute, "models/article_spec.rb", source)
}

#[test]
fn flags_validations_outside_attribute_describe() {
    let source = "\
describe Article do
  it { is_expected.to validate_presence_of(:title) }
  it { is_expected.to validate_length_of(:title).is_at_most(80) }
  it { is_expected.to validate_uniqueness_of :slug }
end
";
    let found = findings(source);

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].line, 2);
    assert_eq!(
        found[0].message,
        "validation of :title belongs in its own `describe \"#title\"` block"
    );
    assert_eq!(found[1].line, 4);
    assert!(found[1].message.contains(":slug"));
}

#[test]
fn attribute_describes_satisfy_the_rule() {
    let source = "\
describe Article do
  describe '#title' do
    it { is_expected.to validate_presence_of(:title) }
  end

  describe :slug do
    context 'when present' do
      it { is_expected.to validate_uniqueness_of(:slug) }
    end
  end
end
";
    assert!(findings(source).is_empty());
}

#[test]
fn describe_for_other_attribute_does_not_count() {
    let source = "\
describe Article do
  describe '#title' do
    it { is_expected.to validate_presence_of(:body) }
  end
end
";
    let found = findings(source);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].line, 3);
}

#[test]
fn only_applies_under_class_describe() {
    let source = "\
describe 'validations' do
  it { is_expected.to validate_presence_of(:title) }
end
";
    assert!(findings(source).is_empty());
}

#[test]
fn context_labels_do_not_count() {
    let source = "\
describe Article do
  context 'title' do
    it { is_expected.to validate_presence_of(:title) }
  end
end
";
    assert_eq!(findings(source).len(), 1);
}
