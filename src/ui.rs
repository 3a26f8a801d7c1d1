use crate::models::AppData;
use crate::stats;

pub fn render_index(data: &AppData) -> String {
    let counts = stats::counts(&data.todos);
    let rate = if counts.total > 0 {
        (counts.completed as f64 / counts.total as f64 * 100.0).round()
    } else {
        0.0
    };

    INDEX_HTML
        .replace("{{THEME}}", if data.theme == crate::models::Theme::Dark { "dark" } else { "" })
        .replace("{{TOTAL}}", &counts.total.to_string())
        .replace("{{COMPLETED}}", &counts.completed.to_string())
        .replace("{{ACTIVE}}", &counts.active.to_string())
        .replace("{{RATE}}", &format!("{rate}"))
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en" class="{{THEME}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>List Hidupku</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f6f4ff;
      --bg-2: #d9d2f7;
      --ink: #262336;
      --muted: #6f6a82;
      --accent: #7c5cff;
      --accent-2: #3a3357;
      --ok: #2d7a4b;
      --warn: #c6862b;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.9);
      --chip: rgba(58, 51, 87, 0.08);
      --shadow: 0 24px 60px rgba(58, 51, 87, 0.16);
    }

    html.dark {
      --bg-1: #17142b;
      --bg-2: #2c2550;
      --ink: #efecff;
      --muted: #a9a3c2;
      --accent: #9d85ff;
      --accent-2: #cfc6f2;
      --card: rgba(34, 29, 61, 0.92);
      --chip: rgba(239, 236, 255, 0.08);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-1));
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
      display: flex;
      justify-content: center;
    }

    .app {
      width: min(1040px, 100%);
      display: grid;
      gap: 24px;
    }

    header.hero {
      text-align: center;
      display: grid;
      gap: 8px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
      color: var(--accent);
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 10px;
    }

    .card {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 22px;
    }

    button, .btn {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 0.92rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      background: var(--chip);
      color: var(--ink);
      transition: transform 120ms ease;
      text-decoration: none;
      display: inline-flex;
      align-items: center;
      gap: 8px;
    }

    button:active {
      transform: scale(0.97);
    }

    button.primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(124, 92, 255, 0.35);
    }

    button.danger {
      color: var(--danger);
    }

    .stat-row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
    }

    .stat {
      background: var(--chip);
      border-radius: 16px;
      padding: 14px;
      display: grid;
      gap: 4px;
    }

    .stat .label {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent);
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: var(--chip);
      border-radius: 999px;
      justify-content: center;
    }

    .tab {
      background: transparent;
      box-shadow: none;
      color: var(--muted);
    }

    .tab.active {
      background: var(--card);
      color: var(--accent);
      box-shadow: 0 8px 16px rgba(58, 51, 87, 0.12);
    }

    .layout {
      display: grid;
      grid-template-columns: 260px 1fr;
      gap: 20px;
    }

    @media (max-width: 760px) {
      .layout {
        grid-template-columns: 1fr;
      }
    }

    .filter-group {
      display: grid;
      gap: 6px;
      margin-bottom: 16px;
    }

    .filter-group h4 {
      margin: 0 0 4px;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .filter-btn {
      justify-content: space-between;
      width: 100%;
      background: transparent;
    }

    .filter-btn.active {
      background: var(--accent);
      color: white;
    }

    .filter-btn .count {
      font-size: 0.78rem;
      background: var(--chip);
      border-radius: 999px;
      padding: 2px 8px;
    }

    form.add-goal {
      display: grid;
      gap: 10px;
      margin-bottom: 18px;
    }

    input, select {
      font-family: inherit;
      font-size: 0.95rem;
      padding: 10px 14px;
      border-radius: 12px;
      border: 1px solid var(--chip);
      background: var(--card);
      color: var(--ink);
    }

    .form-row {
      display: grid;
      grid-template-columns: 1fr 1fr 1fr auto;
      gap: 10px;
    }

    @media (max-width: 760px) {
      .form-row {
        grid-template-columns: 1fr;
      }
    }

    .goal {
      display: flex;
      gap: 12px;
      align-items: flex-start;
      padding: 14px;
      border-radius: 16px;
      border: 1px solid var(--chip);
      margin-bottom: 10px;
    }

    .goal input[type="checkbox"] {
      width: 20px;
      height: 20px;
      margin-top: 2px;
      accent-color: var(--accent);
    }

    .goal .body {
      flex: 1;
      display: grid;
      gap: 6px;
    }

    .goal .meta {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      font-size: 0.78rem;
      color: var(--muted);
    }

    .chip {
      background: var(--chip);
      border-radius: 999px;
      padding: 2px 10px;
    }

    .chip.high { color: var(--danger); }
    .chip.medium { color: var(--warn); }
    .chip.low { color: var(--ok); }

    .goal .text.done {
      text-decoration: line-through;
      color: var(--muted);
    }

    .goal .proof {
      display: flex;
      gap: 10px;
      align-items: center;
      font-size: 0.82rem;
      color: var(--ok);
    }

    .goal .proof img {
      width: 56px;
      height: 56px;
      object-fit: cover;
      border-radius: 10px;
    }

    .goal .actions {
      display: flex;
      gap: 4px;
    }

    .goal .actions button {
      padding: 6px 10px;
      font-size: 0.8rem;
    }

    .empty {
      text-align: center;
      padding: 40px 10px;
      color: var(--muted);
    }

    .board {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
      gap: 12px;
    }

    .board-card {
      border: 1px solid var(--chip);
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 8px;
    }

    .board-card .emoji {
      font-size: 1.6rem;
    }

    .board-card.done {
      opacity: 0.75;
    }

    .section-title {
      margin: 18px 0 10px;
      font-size: 1.05rem;
    }

    .timeline-entry {
      display: flex;
      gap: 14px;
      padding: 12px 0;
      border-left: 2px solid var(--chip);
      padding-left: 18px;
      position: relative;
    }

    .timeline-entry::before {
      content: "";
      position: absolute;
      left: -7px;
      top: 18px;
      width: 12px;
      height: 12px;
      border-radius: 999px;
      background: var(--accent);
    }

    .timeline-entry.done::before {
      background: var(--ok);
    }

    .timeline-year {
      min-width: 64px;
      font-weight: 600;
      color: var(--accent-2);
    }

    .bars {
      display: grid;
      gap: 8px;
    }

    .bar-row {
      display: grid;
      grid-template-columns: 140px 1fr 48px;
      gap: 10px;
      align-items: center;
      font-size: 0.85rem;
    }

    .bar-track {
      background: var(--chip);
      border-radius: 999px;
      height: 10px;
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
      background: var(--accent);
      border-radius: 999px;
    }

    .bar-fill.ok { background: var(--ok); }

    .badges {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(230px, 1fr));
      gap: 12px;
    }

    .badge {
      border: 1px solid var(--chip);
      border-radius: 16px;
      padding: 14px;
      display: grid;
      gap: 6px;
    }

    .badge.locked {
      opacity: 0.5;
      filter: grayscale(0.7);
    }

    .badge .head {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .badge .icon { font-size: 1.4rem; }

    .rarity {
      font-size: 0.72rem;
      border-radius: 999px;
      padding: 2px 8px;
      background: var(--chip);
    }

    .rarity.epic { color: #8d4fd3; }
    .rarity.legendary { color: #d3822a; }
    .rarity.rare { color: #2a6bd3; }

    .templates {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
      gap: 12px;
    }

    .status {
      min-height: 1.2em;
      text-align: center;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status[data-type="error"] { color: var(--danger); }
    .status[data-type="ok"] { color: var(--ok); }

    .hidden { display: none; }
  </style>
</head>
<body>
  <main class="app">
    <header class="hero">
      <h1>List Hidupku</h1>
      <p class="subtitle">Your dreams, your journey &mdash; plan them, chase them, check them off.</p>
      <div class="toolbar">
        <button id="theme-btn" type="button">Theme</button>
        <a class="btn" id="export-btn" href="/api/export">Export Data</a>
        <button id="import-btn" type="button">Import Data</button>
        <input id="import-file" class="hidden" type="file" accept=".json" />
        <button id="clear-btn" type="button" class="danger">Clear Completed</button>
      </div>
    </header>

    <section class="card stat-row">
      <div class="stat"><span class="label">Goals</span><span id="stat-total" class="value">{{TOTAL}}</span></div>
      <div class="stat"><span class="label">Achieved</span><span id="stat-completed" class="value">{{COMPLETED}}</span></div>
      <div class="stat"><span class="label">In Progress</span><span id="stat-active" class="value">{{ACTIVE}}</span></div>
      <div class="stat"><span class="label">Completion</span><span id="stat-rate" class="value">{{RATE}}%</span></div>
    </section>

    <section class="card">
      <div class="toolbar" style="margin-bottom: 14px">
        <input id="search" type="search" placeholder="Search goals or categories..." style="flex: 1; min-width: 200px" />
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-tab="list" role="tab">List</button>
          <button class="tab" type="button" data-tab="vision" role="tab">Vision</button>
          <button class="tab" type="button" data-tab="timeline" role="tab">Timeline</button>
          <button class="tab" type="button" data-tab="analytics" role="tab">Analytics</button>
        </div>
      </div>

      <div id="view-list">
        <div class="layout">
          <aside>
            <div class="filter-group">
              <h4>Status</h4>
              <div id="status-filters"></div>
            </div>
            <div class="filter-group">
              <h4>Category</h4>
              <div id="category-filters"></div>
            </div>
            <div class="filter-group">
              <h4>Recent wins</h4>
              <div id="recent-wins" class="subtitle" style="font-size: 0.85rem"></div>
            </div>
          </aside>
          <div>
            <form class="add-goal" id="add-form">
              <input id="goal-text" type="text" placeholder="e.g. Climb Mount Everest, learn a new language, see the world..." />
              <div class="form-row">
                <select id="goal-category"></select>
                <select id="goal-priority">
                  <option value="low">Low priority</option>
                  <option value="medium" selected>Medium priority</option>
                  <option value="high">High priority</option>
                </select>
                <input id="goal-age" type="number" min="1" placeholder="Target age (optional)" />
                <button class="primary" type="submit">Add Goal</button>
              </div>
            </form>
            <div id="goal-list"></div>
          </div>
        </div>
      </div>

      <div id="view-vision" class="hidden">
        <h3 class="section-title">Dreams in progress</h3>
        <div id="vision-active" class="board"></div>
        <h3 class="section-title">Achieved</h3>
        <div id="vision-done" class="board"></div>
      </div>

      <div id="view-timeline" class="hidden">
        <div id="timeline"></div>
      </div>

      <div id="view-analytics" class="hidden">
        <h3 class="section-title">Completions by month</h3>
        <div id="monthly" class="bars"></div>
        <h3 class="section-title">Categories</h3>
        <div id="category-breakdown" class="bars"></div>
        <h3 class="section-title">Priorities</h3>
        <div id="priority-breakdown" class="bars"></div>
        <h3 class="section-title">Age targets</h3>
        <div id="age-targets"></div>
        <h3 class="section-title">Achievements</h3>
        <div id="badges" class="badges"></div>
      </div>
    </section>

    <section class="card">
      <h3 class="section-title" style="margin-top: 0">Goal templates</h3>
      <p class="subtitle" style="margin-bottom: 12px">Need inspiration? Add one of these with a click.</p>
      <div id="templates" class="templates"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const searchEl = document.getElementById('search');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const CATEGORIES = [
      { key: 'travel', emoji: '\u{1F30D}', label: 'Travel & Places' },
      { key: 'adventure', emoji: '\u{1F3D4}\u{FE0F}', label: 'Adventure & Sports' },
      { key: 'career', emoji: '\u{1F4BC}', label: 'Career & Business' },
      { key: 'learning', emoji: '\u{1F4DA}', label: 'Learning & Skills' },
      { key: 'personal', emoji: '\u{2764}\u{FE0F}', label: 'Personal & Relationships' },
      { key: 'achievement', emoji: '\u{1F3C6}', label: 'Achievements & Goals' },
    ];

    let goals = [];
    let counts = { total: 0, active: 0, completed: 0, categories: {} };
    let activeTab = 'list';
    let activeFilter = 'all';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) {
        setTimeout(() => { statusEl.textContent = ''; }, 1800);
      }
    };

    const categoryMeta = (key) => CATEGORIES.find((c) => c.key === key) || CATEGORIES[4];

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      }[ch]));

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const sendJson = (path, method, body) =>
      api(path, { method, headers: { 'content-type': 'application/json' }, body: JSON.stringify(body) });

    const updateHeadline = () => {
      document.getElementById('stat-total').textContent = counts.total;
      document.getElementById('stat-completed').textContent = counts.completed;
      document.getElementById('stat-active').textContent = counts.active;
      const rate = counts.total > 0 ? Math.round((counts.completed / counts.total) * 100) : 0;
      document.getElementById('stat-rate').textContent = rate + '%';
    };

    const renderFilters = () => {
      const statuses = [
        { key: 'all', label: 'All', count: counts.total },
        { key: 'active', label: 'In Progress', count: counts.active },
        { key: 'completed', label: 'Achieved', count: counts.completed },
      ];
      document.getElementById('status-filters').innerHTML = statuses
        .map((s) => `<button type="button" class="filter-btn ${activeFilter === s.key ? 'active' : ''}" data-filter="${s.key}">${s.label}<span class="count">${s.count}</span></button>`)
        .join('');
      document.getElementById('category-filters').innerHTML = CATEGORIES
        .map((c) => `<button type="button" class="filter-btn ${activeFilter === c.key ? 'active' : ''}" data-filter="${c.key}">${c.emoji} ${c.label.split(' ')[0]}<span class="count">${counts.categories[c.key] || 0}</span></button>`)
        .join('');
      document.querySelectorAll('.filter-btn').forEach((btn) => {
        btn.addEventListener('click', () => {
          activeFilter = btn.dataset.filter;
          refreshGoals().catch((err) => setStatus(err.message, 'error'));
        });
      });
    };

    const goalMetaHtml = (goal) => {
      const meta = categoryMeta(goal.category);
      const target = goal.targetAge ? `<span class="chip">Target: age ${goal.targetAge}</span>` : '';
      return `<div class="meta"><span class="chip">${meta.emoji} ${escapeHtml(goal.category)}</span><span class="chip ${goal.priority}">${goal.priority}</span>${target}</div>`;
    };

    const renderGoals = (visible) => {
      const listEl = document.getElementById('goal-list');
      if (!visible.length) {
        listEl.innerHTML = '<div class="empty">No goals here yet. Add your first dream above! \u{2728}</div>';
        return;
      }
      listEl.innerHTML = visible.map((goal) => {
        const proof = goal.completed && (goal.completedDate || goal.proofPhoto)
          ? `<div class="proof">${goal.completedDate ? 'Achieved ' + goal.completedDate.slice(0, 10) : ''}${goal.proofPhoto ? `<img src="${goal.proofPhoto}" alt="proof" />` : ''}</div>`
          : '';
        return `<div class="goal" data-id="${goal.id}">
          <input type="checkbox" ${goal.completed ? 'checked' : ''} data-action="toggle" />
          <div class="body">
            ${goalMetaHtml(goal)}
            <span class="text ${goal.completed ? 'done' : ''}">${escapeHtml(goal.text)}</span>
            ${proof}
          </div>
          <div class="actions">
            <button type="button" data-action="edit">Edit</button>
            <button type="button" class="danger" data-action="delete">Delete</button>
          </div>
        </div>`;
      }).join('');

      listEl.querySelectorAll('[data-action]').forEach((el) => {
        const id = el.closest('.goal').dataset.id;
        const action = el.dataset.action;
        if (action === 'toggle') {
          el.addEventListener('change', () => toggleGoal(id).catch((err) => setStatus(err.message, 'error')));
        } else if (action === 'edit') {
          el.addEventListener('click', () => editGoal(id).catch((err) => setStatus(err.message, 'error')));
        } else {
          el.addEventListener('click', () => deleteGoal(id).catch((err) => setStatus(err.message, 'error')));
        }
      });
    };

    const renderVision = () => {
      const card = (goal) => {
        const meta = categoryMeta(goal.category);
        return `<div class="board-card ${goal.completed ? 'done' : ''}">
          <span class="emoji">${meta.emoji}</span>
          <strong>${escapeHtml(goal.text)}</strong>
          ${goalMetaHtml(goal)}
        </div>`;
      };
      const active = goals.filter((goal) => !goal.completed);
      const done = goals.filter((goal) => goal.completed);
      document.getElementById('vision-active').innerHTML =
        active.map(card).join('') || '<div class="empty">Nothing in progress.</div>';
      document.getElementById('vision-done').innerHTML =
        done.map(card).join('') || '<div class="empty">No wins yet. Keep going!</div>';
    };

    const renderTimeline = async () => {
      const entries = await api('/api/timeline');
      document.getElementById('timeline').innerHTML = entries.map((entry) => {
        const goal = entry.goal;
        const year = entry.targetYear
          ? `${entry.targetYear}${entry.past ? ' \u{23F0}' : entry.near ? ' \u{1F525}' : ''}`
          : '\u{2014}';
        return `<div class="timeline-entry ${goal.completed ? 'done' : ''}">
          <span class="timeline-year">${year}</span>
          <div class="body">
            <strong class="${goal.completed ? 'done text' : ''}">${escapeHtml(goal.text)}</strong>
            ${goalMetaHtml(goal)}
          </div>
        </div>`;
      }).join('') || '<div class="empty">Add goals with a target age to build your timeline.</div>';
    };

    const barRow = (label, value, max, suffix, ok) => {
      const width = max > 0 ? Math.round((value / max) * 100) : 0;
      return `<div class="bar-row"><span>${label}</span><div class="bar-track"><div class="bar-fill ${ok ? 'ok' : ''}" style="width: ${width}%"></div></div><span>${suffix}</span></div>`;
    };

    const renderAnalytics = async () => {
      const [statsData, badges] = await Promise.all([api('/api/stats'), api('/api/achievements')]);

      const monthlyMax = Math.max(1, ...statsData.monthly.map((point) => point.completed));
      document.getElementById('monthly').innerHTML = statsData.monthly
        .map((point) => barRow(point.month, point.completed, monthlyMax, point.completed, true))
        .join('');

      document.getElementById('category-breakdown').innerHTML = statsData.categories
        .map((entry) => barRow(`${entry.emoji} ${entry.label}`, entry.completed, Math.max(entry.total, 1), `${entry.completed}/${entry.total}`))
        .join('') || '<div class="empty">No goals yet.</div>';

      const priorityMax = Math.max(1, ...statsData.priorities.map((slice) => slice.total));
      document.getElementById('priority-breakdown').innerHTML = statsData.priorities
        .map((slice) => barRow(slice.priority, slice.total, priorityMax, slice.total))
        .join('');

      document.getElementById('age-targets').innerHTML = statsData.ageTargets.map((target) => {
        const state = target.overdue ? '\u{23F0} overdue' : target.nearTerm ? '\u{1F525} soon' : `${target.yearsLeft} years left`;
        return `<div class="bar-row"><span>${escapeHtml(target.goal)}</span><span class="subtitle">${categoryMeta(target.category).emoji} ${target.category}</span><span>${state}</span></div>`;
      }).join('') || '<div class="empty">No age targets set.</div>';

      document.getElementById('badges').innerHTML = badges.map((badge) => `
        <div class="badge ${badge.unlocked ? '' : 'locked'}">
          <div class="head"><span class="icon">${badge.icon}</span><span class="rarity ${badge.rarity}">${badge.rarityLabel}</span></div>
          <strong>${badge.title}</strong>
          <span class="subtitle" style="font-size: 0.82rem">${badge.description}</span>
          <div class="bar-track"><div class="bar-fill ${badge.unlocked ? 'ok' : ''}" style="width: ${Math.min(100, Math.round((badge.current / badge.requirement) * 100))}%"></div></div>
          <span class="subtitle" style="font-size: 0.78rem">${Math.min(badge.current, badge.requirement)}/${badge.requirement}</span>
        </div>`).join('');
    };

    const renderRecentWins = async () => {
      const statsData = await api('/api/stats');
      document.getElementById('recent-wins').innerHTML = statsData.recent
        .map((goal) => `<div>${categoryMeta(goal.category).emoji} ${escapeHtml(goal.text)}</div>`)
        .join('') || 'No wins yet.';
    };

    const renderTemplates = async () => {
      const templates = await api('/api/templates');
      const container = document.getElementById('templates');
      container.innerHTML = templates.map((template, index) => `
        <div class="board-card">
          <span class="emoji">${template.icon}</span>
          <strong>${escapeHtml(template.title)}</strong>
          <span class="subtitle" style="font-size: 0.82rem">${escapeHtml(template.description)}</span>
          <div class="meta"><span class="chip ${template.priority}">${template.priority}</span><span class="chip">Target: age ${template.targetAge}</span></div>
          <button type="button" class="primary" data-template="${index}">Add this goal</button>
        </div>`).join('');
      container.querySelectorAll('[data-template]').forEach((btn) => {
        btn.addEventListener('click', () => {
          const template = templates[Number(btn.dataset.template)];
          addGoal({
            text: template.title,
            category: template.category,
            priority: template.priority,
            targetAge: template.targetAge,
          }).catch((err) => setStatus(err.message, 'error'));
        });
      });
    };

    const applyListResponse = (data) => {
      goals = data.goals;
      counts = data.counts;
      updateHeadline();
      renderFilters();
      renderView().catch((err) => setStatus(err.message, 'error'));
    };

    const refreshGoals = async () => {
      const params = new URLSearchParams();
      if (activeFilter !== 'all') params.set('filter', activeFilter);
      if (searchEl.value.trim()) params.set('q', searchEl.value.trim());
      const data = await api('/api/goals?' + params.toString());
      const visible = data.goals;
      goals = data.goals;
      counts = data.counts;
      updateHeadline();
      renderFilters();
      renderGoals(visible);
    };

    const renderView = async () => {
      if (activeTab === 'list') {
        await refreshGoals();
        await renderRecentWins();
      } else if (activeTab === 'vision') {
        const data = await api('/api/goals');
        goals = data.goals;
        renderVision();
      } else if (activeTab === 'timeline') {
        await renderTimeline();
      } else {
        await renderAnalytics();
      }
    };

    const addGoal = async (payload) => {
      const data = await sendJson('/api/goals', 'POST', payload);
      applyListResponse(data);
      setStatus('Goal added', 'ok');
    };

    const toggleGoal = async (id) => {
      const current = goals.find((goal) => goal.id === id);
      let payload = {};
      if (current && !current.completed) {
        const today = new Date().toISOString().slice(0, 10);
        const date = prompt('When did you achieve it? (YYYY-MM-DD)', today);
        if (date === null) {
          await refreshGoals();
          return;
        }
        if (/^\d{4}-\d{2}-\d{2}$/.test(date.trim())) {
          payload = { completedDate: date.trim() + 'T00:00:00Z' };
        }
      }
      const data = await sendJson(`/api/goals/${id}/toggle`, 'POST', payload);
      applyListResponse(data);
    };

    const editGoal = async (id) => {
      const current = goals.find((goal) => goal.id === id);
      const text = prompt('Edit goal', current ? current.text : '');
      if (text === null || !text.trim()) return;
      const data = await sendJson(`/api/goals/${id}`, 'PUT', { text: text.trim() });
      applyListResponse(data);
    };

    const deleteGoal = async (id) => {
      const data = await api(`/api/goals/${id}`, { method: 'DELETE' });
      applyListResponse(data);
    };

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const text = document.getElementById('goal-text').value;
      const age = document.getElementById('goal-age').value;
      addGoal({
        text,
        category: document.getElementById('goal-category').value,
        priority: document.getElementById('goal-priority').value,
        targetAge: age ? Number(age) : null,
      }).then(() => {
        document.getElementById('goal-text').value = '';
        document.getElementById('goal-age').value = '';
      }).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('goal-category').innerHTML = CATEGORIES
      .map((c) => `<option value="${c.key}" ${c.key === 'personal' ? 'selected' : ''}>${c.emoji} ${c.label}</option>`)
      .join('');

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        activeTab = button.dataset.tab;
        tabs.forEach((tab) => tab.classList.toggle('active', tab === button));
        ['list', 'vision', 'timeline', 'analytics'].forEach((name) => {
          document.getElementById('view-' + name).classList.toggle('hidden', name !== activeTab);
        });
        renderView().catch((err) => setStatus(err.message, 'error'));
      });
    });

    searchEl.addEventListener('input', () => {
      refreshGoals().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('theme-btn').addEventListener('click', () => {
      const next = document.documentElement.classList.contains('dark') ? 'light' : 'dark';
      sendJson('/api/theme', 'POST', { theme: next })
        .then(() => document.documentElement.classList.toggle('dark', next === 'dark'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('clear-btn').addEventListener('click', () => {
      api('/api/goals/clear-completed', { method: 'POST' })
        .then(applyListResponse)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('import-btn').addEventListener('click', () => {
      document.getElementById('import-file').click();
    });

    document.getElementById('import-file').addEventListener('change', (event) => {
      const file = event.target.files && event.target.files[0];
      if (!file) return;
      const reader = new FileReader();
      reader.onload = () => {
        api('/api/import', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: reader.result,
        })
          .then((data) => {
            applyListResponse(data);
            setStatus('Import finished', 'ok');
          })
          .catch((err) => setStatus(err.message, 'error'));
      };
      reader.readAsText(file);
      event.target.value = '';
    });

    renderView().catch((err) => setStatus(err.message, 'error'));
    renderTemplates().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;

    #[test]
    fn substitutes_headline_counts_and_theme() {
        let mut data = AppData::default();
        data.theme = Theme::Dark;
        let page = render_index(&data);
        assert!(page.contains(r#"<html lang="en" class="dark">"#));
        assert!(page.contains(">0%</span>"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn toggle_flow_asks_for_a_completion_date() {
        let page = render_index(&AppData::default());
        assert!(page.contains("When did you achieve it? (YYYY-MM-DD)"));
        assert!(page.contains("payload = { completedDate:"));
    }
}
