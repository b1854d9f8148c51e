//! item 构建：题库 → QTI 文档树
//!
//! 模板里预置了一个样例 item，整个构建就是"深拷贝原型、
//! 逐题填充、重编号"。原型本身永不改动，克隆之间没有任何共享。

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info};

use crate::builder::material;
use crate::error::{AppError, AppResult, TemplateError};
use crate::models::{QuestionRecord, RawBank};
use crate::validators;
use crate::xml::Element;

/// 把整个题库构建进模板文档
///
/// 返回填充完毕的文档和全库引用到的图片集合。每道题依次过
/// 结构校验和完整性校验，任何一道失败整个构建立即中止，
/// 不产出半成品。输出 item 顺序等于 bank 顺序，ident 从 1 起
/// 连续编号。
pub fn build(
    template: &Element,
    bank: &RawBank,
    image_base_path: &Path,
) -> AppResult<(Element, BTreeSet<String>)> {
    info!("开始把题目构建进 XML 结构...");

    if bank.bank.is_empty() {
        return Err(TemplateError::EmptyBank.into());
    }

    let mut doc = template.clone();

    let assessment = doc
        .child_mut("assessment")
        .ok_or_else(|| AppError::missing_node("questestinterop > assessment"))?;
    assessment.set_attr("title", bank.title.clone());

    let section = assessment
        .child_mut("section")
        .ok_or_else(|| AppError::missing_node("questestinterop > assessment > section"))?;

    let prototype = section
        .child("item")
        .cloned()
        .ok_or(TemplateError::MissingPrototype)?;

    // 清空 item 列表，只留原型的克隆体
    section.remove_children_named("item");

    let mut image_set = BTreeSet::new();
    let mut items = Vec::with_capacity(bank.bank.len());

    for (i, raw_record) in bank.bank.iter().enumerate() {
        debug!("处理第 {} 题", i);

        validators::schema::validate(raw_record)?;
        let record: QuestionRecord = serde_json::from_value(raw_record.clone())?;
        let answer_index = validators::integrity::check(&record, image_base_path)?;

        items.push(build_item(&prototype, &record, i, answer_index, &mut image_set)?);
    }

    let section = doc
        .descendant_mut(&["assessment", "section"])
        .ok_or_else(|| AppError::missing_node("questestinterop > assessment > section"))?;
    for item in items {
        section.push_element(item);
    }

    info!("共收集到 {} 张不重复图片", image_set.len());

    Ok((doc, image_set))
}

/// 从原型克隆并填充一个 item
fn build_item(
    prototype: &Element,
    record: &QuestionRecord,
    index: usize,
    answer_index: usize,
    image_set: &mut BTreeSet<String>,
) -> AppResult<Element> {
    let mut item = prototype.clone();

    // bank 里 0 起，输出 1 起
    item.set_attr("ident", (index + 1).to_string());
    item.set_attr("title", format!("Question {:02}", index + 1));

    // 题干
    let question_material = material::render(&record.question, &record.images, image_set);
    let presentation = item
        .child_mut("presentation")
        .ok_or_else(|| AppError::missing_node("item > presentation"))?;
    set_material(presentation, question_material);

    // 选项：原型的第一个 response_label 再当一次原型
    let render_choice = presentation
        .descendant_mut(&["response_lid", "render_choice"])
        .ok_or_else(|| {
            AppError::missing_node("item > presentation > response_lid > render_choice")
        })?;
    let label_prototype = render_choice
        .child("response_label")
        .cloned()
        .ok_or_else(|| {
            AppError::missing_node(
                "item > presentation > response_lid > render_choice > response_label",
            )
        })?;
    render_choice.remove_children_named("response_label");

    for (j, option) in record.options.iter().enumerate() {
        debug!("处理第 {} 题的第 {} 个选项", index, j);

        let mut label = label_prototype.clone();
        label.set_attr("ident", j.to_string());
        set_material(&mut label, material::render(&option.text, &option.images, image_set));
        render_choice.push_element(label);
    }

    // 答案：写解析后的下标，整数和数字字符串产出完全一致
    let varequal = item
        .descendant_mut(&["resprocessing", "respcondition", "conditionvar", "varequal"])
        .ok_or_else(|| {
            AppError::missing_node("item > resprocessing > respcondition > conditionvar > varequal")
        })?;
    varequal.set_text(answer_index.to_string());

    Ok(item)
}

/// 替换 material 子元素，位置保持不变；原型里没有就补在末尾
fn set_material(parent: &mut Element, material: Element) {
    if parent.child("material").is_some() {
        parent.replace_child("material", material);
    } else {
        parent.push_element(material);
    }
}
