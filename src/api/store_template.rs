use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error};

use crate::app::notify::Notifier;

const ACCEPT_VALUE: &str = "application/json, text/javascript, */*; q=0.01";
const TEMPLATE_FIELD: &str = "template";
const SUCCESS_STATUS: f64 = 200.0;

const SUCCESS_TITLE: &str = "OK";
const SUCCESS_MESSAGE: &str = "Malen ble lagret";
const ERROR_TITLE: &str = "Feil";
const ERROR_MESSAGE: &str = "Feil ved lagring av mal i database.";

/// 保存模板到远端
///
/// 返回值只有两种：响应 `status == 200` 时返回完整响应体，其余情况返回 `None`。
/// 网络或解析失败会通过 `notifier.error` 提示并记录日志，不会向上抛出错误。
pub async fn store_template<T, N>(
    template: &T,
    extra_headers: Option<&HashMap<String, String>>,
    url: &str,
    notifier: &N,
) -> Option<Value>
where
    T: Serialize + ?Sized,
    N: Notifier + ?Sized,
{
    match Client::builder().build() {
        Ok(client) => {
            store_template_with_client(&client, template, extra_headers, url, notifier).await
        }
        Err(e) => {
            notifier.error(ERROR_TITLE, ERROR_MESSAGE);
            error!("创建 HTTP 客户端失败: {:?}", e);
            None
        }
    }
}

/// 与 [`store_template`] 相同，但复用调用方提供的客户端
pub async fn store_template_with_client<T, N>(
    client: &Client,
    template: &T,
    extra_headers: Option<&HashMap<String, String>>,
    url: &str,
    notifier: &N,
) -> Option<Value>
where
    T: Serialize + ?Sized,
    N: Notifier + ?Sized,
{
    match send_template(client, template, extra_headers, url).await {
        Ok(resp_json) => {
            if is_success(&resp_json) {
                notifier.success(SUCCESS_TITLE, SUCCESS_MESSAGE);
                return Some(resp_json);
            }
            // status 不是 200 时既不提示也不返回
            None
        }
        Err(e) => {
            notifier.error(ERROR_TITLE, ERROR_MESSAGE);
            error!("保存模板失败: {:?}", e);
            None
        }
    }
}

async fn send_template<T: Serialize + ?Sized>(
    client: &Client,
    template: &T,
    extra_headers: Option<&HashMap<String, String>>,
    url: &str,
) -> Result<Value> {
    let headers = build_headers(extra_headers)?;
    let form = build_form(template)?;

    debug!("POST 模板到: {}", url);
    let resp = client
        .post(url)
        .headers(headers)
        .multipart(form)
        .send()
        .await
        .with_context(|| format!("请求 {} 失败", url))?;

    let status = resp.status();
    debug!("模板保存接口响应状态码: {}", status);

    let resp_json: Value = resp.json().await.context("响应体不是合法的 JSON")?;

    debug!(
        "模板保存接口响应 JSON: {}",
        serde_json::to_string_pretty(&resp_json).unwrap_or_default()
    );

    // null 无法读取 status 字段，按解析失败处理
    if resp_json.is_null() {
        anyhow::bail!("响应体为 null，无法读取 status");
    }

    Ok(resp_json)
}

fn build_headers(extra_headers: Option<&HashMap<String, String>>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));

    // 追加而不是覆盖，同名请求头会保留多个值
    if let Some(extra) = extra_headers {
        for (key, value) in extra {
            let name = HeaderName::from_bytes(key.as_bytes())
                .with_context(|| format!("非法的请求头名称: {}", key))?;
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("非法的请求头值: {}", key))?;
            headers.append(name, value);
        }
    }

    Ok(headers)
}

fn build_form<T: Serialize + ?Sized>(template: &T) -> Result<Form> {
    let template_json = serde_json::to_string(template).context("模板序列化失败")?;
    Ok(Form::new().text(TEMPLATE_FIELD, template_json))
}

fn is_success(resp_json: &Value) -> bool {
    resp_json
        .get("status")
        .and_then(Value::as_f64)
        .is_some_and(|s| s == SUCCESS_STATUS)
}
