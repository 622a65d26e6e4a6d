//! Browser side of the editor page.
//!
//! Expects `FILE_PATH` and `INITIAL_CONTENT` to be defined by a preceding script.
//! The live preview is a handful of regex substitutions and deliberately does not
//! try to match the server renderer.

pub const EDITOR_SCRIPT: &str = r#"
const editor = document.getElementById('editor');
const preview = document.getElementById('preview');
const message = document.getElementById('message');
const saveButton = document.getElementById('save');
const saveUrl = '/save/' + FILE_PATH.split('/').map(encodeURIComponent).join('/');
let clearTimer = null;

function markdownToHtml(md) {
    let html = md;

    html = html.replace(/^### (.*$)/gim, '<h3>$1</h3>');
    html = html.replace(/^## (.*$)/gim, '<h2>$1</h2>');
    html = html.replace(/^# (.*$)/gim, '<h1>$1</h1>');

    html = html.replace(/\*\*(.*?)\*\*/g, '<strong>$1</strong>');
    html = html.replace(/\*(.*?)\*/g, '<em>$1</em>');
    html = html.replace(/`([^`]+)`/g, '<code>$1</code>');
    html = html.replace(/\[([^\]]+)\]\(([^)]+)\)/g, '<a href="$2">$1</a>');

    html = html.replace(/\n\n/g, '</p><p>');
    html = html.replace(/\n/g, '<br>');
    html = '<p>' + html + '</p>';

    html = html.replace(/<p>- (.*?)<\/p>/g, '<ul><li>$1</li></ul>');
    html = html.replace(/<\/ul><ul>/g, '');

    return html;
}

function updatePreview() {
    preview.innerHTML = markdownToHtml(editor.value);
}

function showMessage(text, kind) {
    if (clearTimer) {
        clearTimeout(clearTimer);
        clearTimer = null;
    }
    message.textContent = text;
    message.className = 'message ' + kind;
}

async function saveFile() {
    saveButton.disabled = true;
    showMessage('Saving...', '');

    try {
        const response = await fetch(saveUrl, {
            method: 'POST',
            headers: { 'Content-Type': 'text/plain; charset=utf-8' },
            body: editor.value
        });

        if (response.ok) {
            showMessage('✓ Saved!', 'ok');
            clearTimer = setTimeout(() => showMessage('', ''), 2000);
        } else {
            let detail = response.status === 403 ? 'access denied' : response.statusText;
            try {
                const body = await response.json();
                if (body && body.error) {
                    detail = body.error;
                }
            } catch (_) {}
            showMessage('✗ Error saving: ' + detail, 'error');
        }
    } catch (err) {
        showMessage('✗ Error: ' + err.message, 'error');
    } finally {
        saveButton.disabled = false;
    }
}

editor.value = INITIAL_CONTENT;
editor.addEventListener('input', updatePreview);
saveButton.addEventListener('click', saveFile);
updatePreview();
"#;
